//! Error types for claim remapping data.

use thiserror::Error;

/// Result type for claim remapping operations.
pub type RemappingResult<T> = Result<T, RemappingError>;

/// Errors raised while decoding remapping data handed over by the host.
///
/// Editor operations themselves never fail; an out-of-range index degrades to
/// a no-op and missing validation issues read as "no error".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemappingError {
    #[error("Unknown source type: {0}")]
    UnknownSourceType(String),

    #[error("Unknown field name: {0}")]
    UnknownFieldName(String),

    #[error("Invalid claim remapping data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for RemappingError {
    fn from(err: serde_json::Error) -> Self {
        RemappingError::InvalidData(err.to_string())
    }
}
