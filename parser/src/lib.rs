//! IntSet Parser
//!
//! Textual input side of the integer-set value type:
//! - Grammar validation over raw text (alphabet, brace placement,
//!   digit/space/comma separation)
//! - Parsing of validated text into a canonical `IntSet`
//! - Parse errors carrying the offending input or token

mod error;
mod parse;
mod validate;

pub use error::*;
pub use parse::parse;
pub use validate::validate;
