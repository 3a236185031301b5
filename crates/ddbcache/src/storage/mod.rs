//! Backing store implementations.
//!
//! This module provides concrete implementations of the `ItemStore` trait
//! defined in `ddbcache_core::storage`. Each backend sits behind a feature flag.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB store using `aws-sdk-dynamodb`
//! - `inmemory` (default): In-memory store with declared key schemas
//!
//! # Examples
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p ddbcache --no-default-features --features inmemory
//! ```

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No backing store selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p ddbcache --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
