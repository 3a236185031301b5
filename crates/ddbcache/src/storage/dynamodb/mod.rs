//! DynamoDB backing store.
//!
//! This module provides the `ItemStore` implementation over
//! `aws-sdk-dynamodb`, the client setup, and conversions between the core
//! typed attributes and the SDK's `AttributeValue`.

mod client;
mod conversions;
mod error;
mod store;

pub use client::create_client;
pub use conversions::{attribute_from_sdk, attribute_to_sdk, item_from_sdk, item_to_sdk};
pub use store::DynamoDbStore;
