pub mod core;
pub mod form;
pub mod runtime;
pub mod state;
pub mod submit;
pub mod task;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::core::{FIELDS, Field, Value};
pub use crate::form::{FormSchema, FormValues};
pub use crate::runtime::{Intent, Reducer, Runtime};
pub use crate::state::{AppState, FormStore, ServerMessage};
pub use crate::submit::{REGISTRATION_ENDPOINT, RegistrationClient, SubmitOutcome};
pub use crate::task::TaskExecutor;
pub use crate::terminal::Terminal;
