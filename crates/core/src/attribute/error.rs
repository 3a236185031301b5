use thiserror::Error;

/// Errors raised while converting between logical values and typed attributes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Decoding error: {0}")]
    Decoding(String),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
