use thiserror::Error;

/// Errors raised by the in-memory store, mirroring DynamoDB validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryStoreError {
    #[error("Requested resource not found: table `{0}`")]
    TableNotFound(String),

    #[error("The provided key does not match the key schema of table `{table}`")]
    KeySchemaMismatch { table: String },

    #[error("Key attribute `{attribute}` must be a string, number or binary, got {tag}")]
    InvalidKeyType {
        attribute: String,
        tag: &'static str,
    },

    #[error("Item is missing key attribute `{attribute}`")]
    MissingKeyAttribute { attribute: String },

    #[error("Attribute `{attribute}` holds an invalid number `{value}`")]
    InvalidNumber { attribute: String, value: String },
}
