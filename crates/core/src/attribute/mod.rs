//! Typed attributes and the codec between them and logical values.

mod codec;
mod error;
mod types;
mod wire;

pub use codec::{
    canonical_number, decode, decode_attribute, encode, encode_value, parse_number,
    MAX_NESTING_DEPTH,
};
pub use error::{CodecError, Result};
pub use types::{Item, TypedAttribute};
pub use wire::{item_from_json, item_from_str, item_to_json};
