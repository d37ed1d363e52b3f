//! # Error Types
//!
//! Parsing errors for the shared value objects.

use thiserror::Error;

/// Errors raised while decoding an `Address` or `Hash` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Decoded value is longer than the target width.
    #[error("value too long: {actual} bytes > {max} bytes")]
    TooLong { actual: usize, max: usize },

    /// Decoded value does not have the exact width required.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl From<hex::FromHexError> for ParseError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex(err.to_string())
    }
}
