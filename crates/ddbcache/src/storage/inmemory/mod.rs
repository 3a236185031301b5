//! In-memory backing store for testing.
//!
//! This module provides an in-memory implementation of `ItemStore` that keeps
//! tables in HashMaps wrapped in `Arc<RwLock<_>>`. Each table declares its key
//! attributes up front so point operations are checked the way DynamoDB
//! checks them.
//!
//! # Example
//!
//! ```rust,ignore
//! use ddbcache::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::with_tables([("cache", vec!["key"])]);
//! // Use store for testing...
//! ```

mod error;
mod store;

pub use error::InMemoryStoreError;
pub use store::InMemoryStore;
