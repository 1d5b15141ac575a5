pub mod schema;
pub mod values;

pub use schema::{FieldRules, FormSchema, Rule};
pub use values::FormValues;
