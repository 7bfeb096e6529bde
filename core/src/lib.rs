//! IntSet Core Types
//!
//! Foundational value type for the bounded integer-set column:
//! - The `IntSet` canonical set value (duplicate-free, capacity-bounded)
//! - The canonicalizing constructors every producer of sets funnels through
//! - The textual renderer (`Display`)
//! - The core error type

mod error;
mod set;

pub use error::*;
pub use set::*;
