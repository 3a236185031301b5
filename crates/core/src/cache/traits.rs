use async_trait::async_trait;

use crate::storage::{CallOptions, WriteAck};
use crate::value::Value;

use super::{CacheKey, Result};

/// Trait for basic cache operations.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value by key. A miss is `Ok(None)`, not an error.
    async fn get(&self, key: &CacheKey, options: &CallOptions) -> Result<Option<Value>>;

    /// Stores a value, unconditionally replacing any previous value.
    async fn set(&self, key: &CacheKey, value: Value, options: &CallOptions) -> Result<WriteAck>;

    /// Deletes a value. Deleting a missing key succeeds.
    async fn delete(&self, key: &CacheKey, options: &CallOptions) -> Result<WriteAck>;

    /// Whether `value` may be cached. Accepts everything unless overridden.
    fn is_cacheable_value(&self, _value: &Value) -> bool {
        true
    }
}
