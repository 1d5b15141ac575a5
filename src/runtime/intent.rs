use crate::task::TaskCompletion;
use crate::terminal::KeyEvent;
use crate::widgets::traits::TextAction;

/// Everything the reducer can be asked to do, whether it came from a key
/// binding, the focused widget, or a finished background task.
#[derive(Debug, Clone)]
pub enum Intent {
    Exit,
    NextFocus,
    PrevFocus,
    InputKey(KeyEvent),
    TextAction(TextAction),
    TaskCompleted(TaskCompletion),
    Noop,
}
