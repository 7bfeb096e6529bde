//! Host-facing entry points.
//!
//! One function per operation the host dispatches on. Each delegates to the
//! owning crate and unifies failures under `CallError`; none of them touch
//! the host's error channel directly, that routing belongs to `surface`.

use intset_core::IntSet;

use crate::error::CallResult;

// ==================== TEXT I/O ====================

/// Parse the textual representation into a set value.
pub fn parse_in(text: &str) -> CallResult<IntSet> {
    Ok(intset_parser::parse(text)?)
}

/// Render a set value into its textual representation.
pub fn render_out(set: &IntSet) -> String {
    set.to_string()
}

// ==================== WIRE I/O ====================

/// Decode a binary payload into a set value.
pub fn decode_recv(bytes: &[u8]) -> CallResult<IntSet> {
    Ok(intset_codec::decode(bytes)?)
}

/// Encode a set value into a fresh binary buffer.
pub fn encode_send(set: &IntSet) -> Vec<u8> {
    intset_codec::encode(set)
}

/// Encode a set value, appending to a caller-owned buffer.
pub fn encode_send_into(set: &IntSet, buf: &mut Vec<u8>) {
    intset_codec::encode_into(set, buf)
}

// ==================== ALGEBRA ====================

/// Elements of `a` absent from `b`.
pub fn minus(a: &IntSet, b: &IntSet) -> CallResult<IntSet> {
    Ok(intset_algebra::minus(a, b)?)
}

/// Elements in exactly one of `a` and `b`.
pub fn disjunction(a: &IntSet, b: &IntSet) -> CallResult<IntSet> {
    Ok(intset_algebra::disjunction(a, b)?)
}

/// All elements of `a` and `b`.
pub fn union(a: &IntSet, b: &IntSet) -> CallResult<IntSet> {
    Ok(intset_algebra::union(a, b)?)
}

/// Elements common to `a` and `b`.
pub fn intersection(a: &IntSet, b: &IntSet) -> CallResult<IntSet> {
    Ok(intset_algebra::intersection(a, b)?)
}

/// Order-insensitive set equality.
pub fn equal(a: &IntSet, b: &IntSet) -> bool {
    intset_algebra::equal(a, b)
}

/// Whether `a` is a subset of `b`.
pub fn subset(a: &IntSet, b: &IntSet) -> bool {
    intset_algebra::subset(a, b)
}

/// Whether `value` is an element of `set`.
pub fn contains(value: i32, set: &IntSet) -> bool {
    intset_algebra::contains(value, set)
}

/// Number of elements in `set`.
pub fn cardinality(set: &IntSet) -> i32 {
    intset_algebra::cardinality(set)
}

// ==================== TESTS ====================
