//! IntSet Wire Codec
//!
//! Binary encode/decode for the integer-set value type:
//! - A 4-byte big-endian cardinality header
//! - That many 4-byte big-endian signed elements, in stored order
//! - Strict decoding: header checked against the capacity bound before any
//!   element is read, exact-length payload, no bytes left over

mod codec;
mod error;

pub use codec::{decode, encode, encode_into, encoded_len};
pub use error::*;
