//! DynamoDB JSON representation of stored items.
//!
//! This is the shape other tooling (the AWS CLI, exports, streams) sees, so
//! reading it back is the only way to recover logical values outside the
//! adapter.

use super::{CodecError, Item, Result};

/// Renders an item as DynamoDB JSON.
pub fn item_to_json(item: &Item) -> Result<serde_json::Value> {
    serde_json::to_value(item).map_err(|e| CodecError::Encoding(e.to_string()))
}

/// Parses an item from DynamoDB JSON. Unknown type tags are rejected.
pub fn item_from_json(json: serde_json::Value) -> Result<Item> {
    serde_json::from_value(json).map_err(|e| CodecError::Decoding(e.to_string()))
}

/// Parses an item from a DynamoDB JSON string.
pub fn item_from_str(s: &str) -> Result<Item> {
    serde_json::from_str(s).map_err(|e| CodecError::Decoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::attribute::TypedAttribute;

    #[test]
    fn test_item_json_round_trip() {
        let json = json!({
            "id": {"N": "42"},
            "environment": {"S": "dev"},
            "config": {"M": {"data": {"M": {"key": {"S": "the answer"}}}}}
        });

        let item = item_from_json(json.clone()).unwrap();
        assert_eq!(item["id"], TypedAttribute::Number("42".into()));
        assert_eq!(item_to_json(&item).unwrap(), json);
    }

    #[test]
    fn test_unknown_tag_is_decoding_error() {
        let err = item_from_json(json!({"key": {"X": "42"}})).unwrap_err();
        assert!(matches!(err, CodecError::Decoding(_)));
    }

    #[test]
    fn test_item_from_str() {
        let item = item_from_str(r#"{"key": {"S": "42"}, "flag": {"BOOL": false}}"#).unwrap();
        assert_eq!(item["key"].as_s(), Some("42"));
        assert_eq!(item["flag"], TypedAttribute::Boolean(false));
    }

    #[test]
    fn test_item_from_str_rejects_bad_base64() {
        let err = item_from_str(r#"{"blob": {"B": "***"}}"#).unwrap_err();
        assert!(matches!(err, CodecError::Decoding(_)));
    }
}
