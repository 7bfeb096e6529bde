//! Parse error types.

use intset_core::SetError;
use thiserror::Error;

/// Errors raised while reading the textual representation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text does not match the set grammar.
    #[error("invalid input syntax for integer set: \"{input}\"")]
    InvalidSyntax { input: String },

    /// A numeric token does not fit in a 32-bit signed integer.
    #[error("value \"{token}\" is out of range for a 4-byte integer")]
    NumberOutOfRange { token: String },

    /// The text holds more distinct elements than the set allows.
    #[error("{0}")]
    Capacity(#[from] SetError),
}

impl ParseError {
    pub fn invalid_syntax(input: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            input: input.into(),
        }
    }

    pub fn number_out_of_range(token: impl Into<String>) -> Self {
        Self::NumberOutOfRange {
            token: token.into(),
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
