pub mod execution;
pub mod executor;

pub use execution::{
    CancelToken, TaskCompletion, TaskInvocation, TaskKind, TaskOutput, execute_invocation,
};
pub use executor::TaskExecutor;
