pub mod field;
pub mod value;

pub use field::{FIELDS, Field};
pub use value::Value;
