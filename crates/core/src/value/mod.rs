mod json;
mod types;

pub use types::{Document, Value};
