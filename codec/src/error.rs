//! Codec error types.

use intset_core::SetError;
use thiserror::Error;

/// Errors raised while decoding the binary representation.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload ends before the data its header declares.
    #[error("binary payload truncated: need {needed} bytes, found {available}")]
    Truncated { needed: usize, available: usize },

    /// Bytes remain past the data the header declares.
    #[error("binary payload carries {remaining} trailing bytes")]
    TrailingBytes { remaining: usize },

    /// The declared cardinality exceeds the capacity bound.
    #[error("{0}")]
    Capacity(#[from] SetError),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
