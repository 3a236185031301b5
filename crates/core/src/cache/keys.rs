//! Logical cache keys and their normalization into key attributes.

use std::collections::HashMap;

use serde_json::Number;

use crate::value::{Document, Value};

use super::{CacheConfig, CacheError, Result};

/// A logical cache key.
///
/// Scalars are stored under the configured key field; composite keys are
/// used verbatim as the item's key attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheKey {
    String(String),
    Number(Number),
    Composite(Document),
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        CacheKey::String(s.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        CacheKey::String(s)
    }
}

impl From<i64> for CacheKey {
    fn from(n: i64) -> Self {
        CacheKey::Number(n.into())
    }
}

impl From<u64> for CacheKey {
    fn from(n: u64) -> Self {
        CacheKey::Number(n.into())
    }
}

impl From<i32> for CacheKey {
    fn from(n: i32) -> Self {
        CacheKey::Number(n.into())
    }
}

impl From<Number> for CacheKey {
    fn from(n: Number) -> Self {
        CacheKey::Number(n)
    }
}

impl From<Document> for CacheKey {
    fn from(attributes: Document) -> Self {
        CacheKey::Composite(attributes)
    }
}

impl TryFrom<Value> for CacheKey {
    type Error = CacheError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(CacheKey::String(s)),
            Value::Number(n) => Ok(CacheKey::Number(n)),
            Value::Map(attributes) => Ok(CacheKey::Composite(attributes)),
            other => Err(CacheError::InvalidKey(format!(
                "expected a string, number or object key, got {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for CacheKey {
    type Error = CacheError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        CacheKey::try_from(Value::from(json))
    }
}

/// Turns a key into the attributes that address an item.
///
/// A scalar becomes `{ <key_field>: scalar }`; a composite key is returned
/// unchanged and must carry every attribute of the table's primary key.
pub fn normalize_key(key: &CacheKey, config: &CacheConfig) -> Result<Document> {
    match key {
        CacheKey::String(s) => Ok(HashMap::from([(
            config.key_field.clone(),
            Value::String(s.clone()),
        )])),
        CacheKey::Number(n) => Ok(HashMap::from([(
            config.key_field.clone(),
            Value::Number(n.clone()),
        )])),
        CacheKey::Composite(attributes) if attributes.is_empty() => Err(CacheError::InvalidKey(
            "composite key must have at least one attribute".to_string(),
        )),
        CacheKey::Composite(attributes) => Ok(attributes.clone()),
    }
}
