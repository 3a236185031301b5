//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between the SDK's `AttributeValue` maps and
//! the core typed attributes. These are testable in isolation without
//! DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use ddbcache_core::attribute::{CodecError, Item, Result, TypedAttribute};

/// Convert a core item to an SDK item.
pub fn item_to_sdk(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, attribute)| (name, attribute_to_sdk(attribute)))
        .collect()
}

/// Convert a typed attribute to an SDK attribute value.
pub fn attribute_to_sdk(attribute: TypedAttribute) -> AttributeValue {
    match attribute {
        TypedAttribute::String(s) => AttributeValue::S(s),
        TypedAttribute::Number(n) => AttributeValue::N(n),
        TypedAttribute::Binary(bytes) => AttributeValue::B(Blob::new(bytes)),
        TypedAttribute::Boolean(b) => AttributeValue::Bool(b),
        TypedAttribute::Null(null) => AttributeValue::Null(null),
        TypedAttribute::Map(map) => AttributeValue::M(item_to_sdk(map)),
        TypedAttribute::List(items) => {
            AttributeValue::L(items.into_iter().map(attribute_to_sdk).collect())
        }
        TypedAttribute::StringSet(members) => AttributeValue::Ss(members),
        TypedAttribute::NumberSet(members) => AttributeValue::Ns(members),
        TypedAttribute::BinarySet(members) => {
            AttributeValue::Bs(members.into_iter().map(Blob::new).collect())
        }
    }
}

/// Convert an SDK item to a core item.
pub fn item_from_sdk(item: HashMap<String, AttributeValue>) -> Result<Item> {
    item.into_iter()
        .map(|(name, value)| Ok((name, attribute_from_sdk(value)?)))
        .collect()
}

/// Convert an SDK attribute value to a typed attribute.
///
/// Fails on attribute types this SDK version does not recognize.
pub fn attribute_from_sdk(value: AttributeValue) -> Result<TypedAttribute> {
    match value {
        AttributeValue::S(s) => Ok(TypedAttribute::String(s)),
        AttributeValue::N(n) => Ok(TypedAttribute::Number(n)),
        AttributeValue::B(blob) => Ok(TypedAttribute::Binary(blob.into_inner())),
        AttributeValue::Bool(b) => Ok(TypedAttribute::Boolean(b)),
        AttributeValue::Null(null) => Ok(TypedAttribute::Null(null)),
        AttributeValue::M(map) => item_from_sdk(map).map(TypedAttribute::Map),
        AttributeValue::L(items) => items
            .into_iter()
            .map(attribute_from_sdk)
            .collect::<Result<Vec<_>>>()
            .map(TypedAttribute::List),
        AttributeValue::Ss(members) => Ok(TypedAttribute::StringSet(members)),
        AttributeValue::Ns(members) => Ok(TypedAttribute::NumberSet(members)),
        AttributeValue::Bs(members) => Ok(TypedAttribute::BinarySet(
            members.into_iter().map(Blob::into_inner).collect(),
        )),
        other => Err(CodecError::Decoding(format!(
            "unrecognized attribute type: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item::from([
            ("id".to_string(), TypedAttribute::Number("42".into())),
            ("environment".to_string(), TypedAttribute::String("dev".into())),
            (
                "config".to_string(),
                TypedAttribute::Map(Item::from([(
                    "data".to_string(),
                    TypedAttribute::List(vec![
                        TypedAttribute::Boolean(true),
                        TypedAttribute::Null(true),
                        TypedAttribute::Binary(vec![0, 1]),
                        TypedAttribute::StringSet(vec!["a".into()]),
                        TypedAttribute::NumberSet(vec!["1".into()]),
                        TypedAttribute::BinarySet(vec![vec![2]]),
                    ]),
                )])),
            ),
        ])
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();

        let parsed = item_from_sdk(item_to_sdk(item.clone())).unwrap();

        assert_eq!(parsed, item);
    }

    #[test]
    fn test_item_has_sdk_shapes() {
        let sdk = item_to_sdk(sample_item());

        assert_eq!(sdk.get("id").unwrap().as_n().unwrap(), "42");
        assert_eq!(sdk.get("environment").unwrap().as_s().unwrap(), "dev");

        let config = sdk.get("config").unwrap().as_m().unwrap();
        let data = config.get("data").unwrap().as_l().unwrap();
        assert_eq!(data[0], AttributeValue::Bool(true));
        assert_eq!(data[1], AttributeValue::Null(true));
        assert_eq!(data[2], AttributeValue::B(Blob::new(vec![0, 1])));
        assert_eq!(data[3], AttributeValue::Ss(vec!["a".to_string()]));
        assert_eq!(data[4], AttributeValue::Ns(vec!["1".to_string()]));
        assert_eq!(data[5], AttributeValue::Bs(vec![Blob::new(vec![2])]));
    }
}
