mod traits;
mod types;

pub use traits::ItemStore;
pub use types::{CallOptions, ReturnValues, WriteAck};
