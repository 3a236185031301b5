//! ddbcache - a key-value cache over a single DynamoDB table.
//!
//! [`TableCache`] implements [`ddbcache_core::cache::Cache`] on top of any
//! [`ddbcache_core::storage::ItemStore`]. The DynamoDB store is the production
//! backend; the in-memory store mirrors its point-operation semantics for tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod output;
pub mod storage;

pub use cache::TableCache;
#[cfg(feature = "dynamodb")]
pub use cache::DynamoDbCache;
pub use config::{Config, ConnectionConfig, StaticCredentials};
