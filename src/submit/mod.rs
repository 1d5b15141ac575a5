pub mod client;

pub use client::{REGISTRATION_ENDPOINT, RegistrationClient, SubmitOutcome};
