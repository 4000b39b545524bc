//! Codec error model.

use thiserror::Error;

/// Error produced while decoding or encoding a payload.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload contains a key with no matching declared field, and the
    /// codec is configured to reject unknown fields.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The payload is not well-formed JSON, is not an object, or a matched
    /// value has the wrong shape for its field.
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CodecError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField(field.into())
    }
}
