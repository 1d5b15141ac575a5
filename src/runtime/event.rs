use crate::core::{Field, Value};

/// Actions emitted by widgets in `InteractionResult`.
/// These flow upward from widgets to the reducer.
#[derive(Debug, Clone)]
pub enum WidgetAction {
    /// The widget's bound field has a new candidate value.
    ValueChanged { field: Field, value: Value },
    /// Widget signals it is done with its value; navigation decides whether
    /// to focus the next input.
    InputDone,
    /// The submit button was activated.
    SubmitRequested,
}
