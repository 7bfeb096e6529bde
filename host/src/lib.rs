//! IntSet Host Boundary
//!
//! The flat entry points a storage engine dispatches to, and the seam its
//! error channel plugs into:
//! - Text I/O: `parse_in`, `render_out`
//! - Wire I/O: `decode_recv`, `encode_send`, `encode_send_into`
//! - Algebra: `minus`, `disjunction`, `union`, `intersection`, `equal`,
//!   `subset`, `contains`, `cardinality`
//! - Errors: `CallError` unifying the lower crates, `ErrorKind` for the
//!   engine's structured channel, `ErrorSink` and `surface` for routing

mod calls;
mod error;
mod sink;

pub use calls::*;
pub use error::*;
pub use sink::*;
