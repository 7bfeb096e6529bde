//! Call-level error types.

use intset_codec::CodecError;
use intset_core::SetError;
use intset_parser::ParseError;
use thiserror::Error;

/// Error kinds surfaced on the host's structured error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text does not match the set grammar.
    InvalidSyntax,
    /// A numeric token does not fit in the 32-bit domain.
    NumberOutOfRange,
    /// A set would exceed the capacity bound.
    CapacityExceeded,
    /// A binary payload ends before its declared data.
    TruncatedInput,
    /// A binary payload carries bytes past its declared data.
    TrailingBytes,
}

/// Errors raised by the host-facing entry points.
#[derive(Debug, Error)]
pub enum CallError {
    /// Text input failed to parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Binary input failed to decode.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A produced set would exceed the capacity bound.
    #[error("set error: {0}")]
    Set(#[from] SetError),
}

impl CallError {
    /// The structured kind for the host's error channel. Capacity failures
    /// map to one kind no matter which layer caught them.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CallError::Parse(ParseError::InvalidSyntax { .. }) => ErrorKind::InvalidSyntax,
            CallError::Parse(ParseError::NumberOutOfRange { .. }) => ErrorKind::NumberOutOfRange,
            CallError::Parse(ParseError::Capacity(_)) => ErrorKind::CapacityExceeded,
            CallError::Codec(CodecError::Truncated { .. }) => ErrorKind::TruncatedInput,
            CallError::Codec(CodecError::TrailingBytes { .. }) => ErrorKind::TrailingBytes,
            CallError::Codec(CodecError::Capacity(_)) => ErrorKind::CapacityExceeded,
            CallError::Set(SetError::CapacityExceeded { .. }) => ErrorKind::CapacityExceeded,
        }
    }
}

/// Result type for entry-point calls.
pub type CallResult<T> = Result<T, CallError>;

// ==================== TESTS ====================
