use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A stored item: attribute name to typed attribute.
pub type Item = HashMap<String, TypedAttribute>;

/// A value tagged with its storage type.
///
/// Serializes to the DynamoDB JSON shape, e.g. `{"S": "42"}` or
/// `{"M": {"data": {"N": "1"}}}`. Binary payloads are base64 in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypedAttribute {
    #[serde(rename = "S")]
    String(String),
    /// Decimal string.
    #[serde(rename = "N")]
    Number(String),
    #[serde(rename = "B", with = "base64_bytes")]
    Binary(Vec<u8>),
    #[serde(rename = "BOOL")]
    Boolean(bool),
    /// Always `true` when written by this crate.
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "M")]
    Map(HashMap<String, TypedAttribute>),
    #[serde(rename = "L")]
    List(Vec<TypedAttribute>),
    #[serde(rename = "SS")]
    StringSet(Vec<String>),
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),
    #[serde(rename = "BS", with = "base64_bytes_list")]
    BinarySet(Vec<Vec<u8>>),
}

impl TypedAttribute {
    /// The wire tag of this attribute.
    pub fn tag(&self) -> &'static str {
        match self {
            TypedAttribute::String(_) => "S",
            TypedAttribute::Number(_) => "N",
            TypedAttribute::Binary(_) => "B",
            TypedAttribute::Boolean(_) => "BOOL",
            TypedAttribute::Null(_) => "NULL",
            TypedAttribute::Map(_) => "M",
            TypedAttribute::List(_) => "L",
            TypedAttribute::StringSet(_) => "SS",
            TypedAttribute::NumberSet(_) => "NS",
            TypedAttribute::BinarySet(_) => "BS",
        }
    }

    pub fn as_s(&self) -> Option<&str> {
        match self {
            TypedAttribute::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_m(&self) -> Option<&HashMap<String, TypedAttribute>> {
        match self {
            TypedAttribute::Map(map) => Some(map),
            _ => None,
        }
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

mod base64_bytes_list {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(members: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(members.len()))?;
        for member in members {
            seq.serialize_element(&STANDARD.encode(member))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|encoded| STANDARD.decode(encoded.as_bytes()))
            .collect::<Result<_, _>>()
            .map_err(serde::de::Error::custom)
    }
}
