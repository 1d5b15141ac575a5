use crate::task::TaskInvocation;

/// Side effects requested by the reducer, carried out by the runner.
#[derive(Debug, Clone)]
pub enum Effect {
    Spawn(TaskInvocation),
    RequestRender,
}
