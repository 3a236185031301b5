use thiserror::Error;

use crate::attribute::CodecError;

/// Boxed error from a backing store, kept as-is for callers to downcast.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The key is neither a scalar nor an object. Never sent to the store.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The item was read but lacks the value/data attributes for this configuration.
    #[error("Malformed item: {0}")]
    MalformedItem(String),
    /// Any failure reported by the backing store, uninterpreted.
    #[error("Backing store error during {operation}: {source}")]
    BackingStore {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl CacheError {
    /// Wraps a backing store failure for the given operation.
    pub fn backing_store(operation: &'static str, source: impl Into<StoreError>) -> Self {
        Self::BackingStore {
            operation,
            source: source.into(),
        }
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
