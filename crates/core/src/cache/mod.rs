mod config;
mod error;
mod item;
mod keys;
mod traits;

pub use config::{
    CacheConfig, DEFAULT_DATA_REF, DEFAULT_KEY_FIELD, DEFAULT_TABLE_NAME, DEFAULT_VAL_FIELD,
};
pub use error::{CacheError, Result, StoreError};
pub use item::{build_item, extract_data, key_item, wrap_value};
pub use keys::{normalize_key, CacheKey};
pub use traits::Cache;
