//! Core error types.

use thiserror::Error;

/// Errors raised while constructing a set value.
#[derive(Debug, Error)]
pub enum SetError {
    /// The set would hold more distinct elements than the capacity bound.
    #[error("integer set capacity exceeded: more than {limit} distinct elements")]
    CapacityExceeded { limit: usize },
}

/// Result type for set construction.
pub type SetResult<T> = Result<T, SetError>;
