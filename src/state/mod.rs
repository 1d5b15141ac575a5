pub mod app_state;
pub mod focus;
pub mod runs;
pub mod server;
pub mod store;

pub use app_state::AppState;
pub use server::ServerMessage;
pub use store::{FormStore, SubmitPhase};
