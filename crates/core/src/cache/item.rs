//! Pure item construction and extraction for the adapter operations.

use std::collections::HashMap;

use crate::attribute::{decode, encode, Item};
use crate::value::{Document, Value};

use super::{normalize_key, CacheConfig, CacheError, CacheKey, Result};

/// Encodes the key attributes addressing an item.
pub fn key_item(key: &CacheKey, config: &CacheConfig) -> Result<Item> {
    Ok(encode(&normalize_key(key, config)?)?)
}

/// Wraps a value as `{ <val_field>: { <data_ref>: value } }`.
pub fn wrap_value(value: Value, config: &CacheConfig) -> Document {
    let data = HashMap::from([(config.data_ref.clone(), value)]);
    HashMap::from([(config.val_field.clone(), Value::Map(data))])
}

/// Builds the full item written by `set`.
///
/// Key attributes and the value attribute are merged shallowly. A key
/// attribute named like `val_field` is overwritten by the value.
pub fn build_item(key: &CacheKey, value: Value, config: &CacheConfig) -> Result<Item> {
    let mut item = key_item(key, config)?;
    let value_item = encode(&wrap_value(value, config))?;

    if item.contains_key(&config.val_field) {
        tracing::warn!(
            attribute = %config.val_field,
            "Key attribute overwritten by the value attribute"
        );
    }

    item.extend(value_item);
    Ok(item)
}

/// Decodes an item read by `get` and pulls out `<val_field>.<data_ref>`.
pub fn extract_data(item: Item, config: &CacheConfig) -> Result<Value> {
    let mut document = decode(item)?;

    let wrapper = document.remove(&config.val_field).ok_or_else(|| {
        CacheError::MalformedItem(format!("missing attribute `{}`", config.val_field))
    })?;

    let mut wrapper = match wrapper {
        Value::Map(map) => map,
        other => {
            return Err(CacheError::MalformedItem(format!(
                "attribute `{}` is a {}, expected a map",
                config.val_field,
                other.kind()
            )))
        }
    };

    wrapper.remove(&config.data_ref).ok_or_else(|| {
        CacheError::MalformedItem(format!(
            "attribute `{}` has no `{}` entry",
            config.val_field, config.data_ref
        ))
    })
}
