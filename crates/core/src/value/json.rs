//! Conversions between logical values and `serde_json`.
//!
//! JSON has no binary or set types: binary becomes an array of byte numbers
//! (the shape serde uses for `Vec<u8>`) and sets become arrays.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::attribute::{CodecError, Result};

use super::Value;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => JsonValue::Number(n),
            Value::String(s) => JsonValue::String(s),
            Value::Binary(bytes) => bytes_to_json(bytes),
            Value::List(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Map(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(name, value)| (name, JsonValue::from(value)))
                    .collect(),
            ),
            Value::StringSet(members) => {
                JsonValue::Array(members.into_iter().map(JsonValue::String).collect())
            }
            Value::NumberSet(members) => {
                JsonValue::Array(members.into_iter().map(JsonValue::Number).collect())
            }
            Value::BinarySet(members) => {
                JsonValue::Array(members.into_iter().map(bytes_to_json).collect())
            }
        }
    }
}

fn bytes_to_json(bytes: Vec<u8>) -> JsonValue {
    JsonValue::Array(bytes.into_iter().map(JsonValue::from).collect())
}

impl Value {
    /// Converts any serializable type into a logical value.
    ///
    /// Fails with an encoding error when serde cannot represent the value as
    /// JSON (for example maps with non-string keys).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Value::from)
            .map_err(|e| CodecError::Encoding(e.to_string()))
    }

    /// Converts this value into a deserializable type.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(JsonValue::from(self))
            .map_err(|e| CodecError::Decoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Settings {
        name: String,
        retries: u32,
        ratio: f64,
        tags: Vec<String>,
    }

    #[test]
    fn test_json_object_becomes_map() {
        let value = Value::from(json!({"key": "the answer", "n": 42}));

        let map = value.as_map().unwrap();
        assert_eq!(map.get("key"), Some(&Value::from("the answer")));
        assert_eq!(map.get("n"), Some(&Value::from(42i64)));
    }

    #[test]
    fn test_binary_and_sets_become_arrays() {
        assert_eq!(JsonValue::from(Value::Binary(vec![1, 2])), json!([1, 2]));
        assert_eq!(
            JsonValue::from(Value::StringSet(vec!["a".into(), "b".into()])),
            json!(["a", "b"])
        );
        assert_eq!(
            JsonValue::from(Value::NumberSet(vec![1.into(), 2.into()])),
            json!([1, 2])
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let settings = Settings {
            name: "primary".to_string(),
            retries: 3,
            ratio: 0.25,
            tags: vec!["a".to_string(), "b".to_string()],
        };

        let value = Value::from_serialize(&settings).unwrap();
        let back: Settings = value.deserialize_into().unwrap();

        assert_eq!(back, settings);
    }

    #[test]
    fn test_from_serialize_rejects_non_string_map_keys() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], "x");

        let err = Value::from_serialize(&map).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
    }

    #[test]
    fn test_deserialize_into_wrong_shape_is_decoding_error() {
        let err = Value::from("not a struct")
            .deserialize_into::<Settings>()
            .unwrap_err();
        assert!(matches!(err, CodecError::Decoding(_)));
    }
}
