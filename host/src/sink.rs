//! The injected host error channel.

use crate::error::{CallResult, ErrorKind};

/// The host's structured error channel.
///
/// A storage engine embedding the set type implements this over its real
/// reporting mechanism; the entry points themselves stay free of any host
/// dependency.
pub trait ErrorSink {
    /// Report one error with its structured kind and display message.
    fn raise(&mut self, kind: ErrorKind, message: String);
}

/// Route an entry-point result into the host's error channel.
///
/// `Ok` values pass through untouched. An `Err` is raised on the sink
/// exactly once and yields `None`, so the caller hands nothing back to the
/// engine.
pub fn surface<T>(result: CallResult<T>, sink: &mut dyn ErrorSink) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let kind = err.kind();
            sink.raise(kind, err.to_string());
            None
        }
    }
}

// ==================== TESTS ====================
