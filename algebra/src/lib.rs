//! IntSet Algebra
//!
//! Pure set-algebra operations over canonical sets:
//! - Set-producing: `minus`, `disjunction`, `union`, `intersection`
//! - Predicates: `equal`, `subset`, `contains`
//! - `cardinality`
//!
//! Every produced set goes through the canonicalizing constructor, so the
//! capacity bound holds for results exactly as it does for parsed input.

mod ops;

pub use ops::*;
