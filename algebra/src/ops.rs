//! Set-algebra operations.
//!
//! Operands are borrowed and never change. Membership checks are linear
//! scans, so the binary operations are O(|a|·|b|); the capacity bound keeps
//! that cost trivial.

use intset_core::{IntSet, SetResult};

/// Elements of `a` absent from `b`, in `a`'s order.
pub fn minus(a: &IntSet, b: &IntSet) -> SetResult<IntSet> {
    IntSet::from_elements(a.iter().copied().filter(|v| !b.contains(*v)))
}

/// Symmetric difference: `a`-exclusive elements, then `b`-exclusive ones.
pub fn disjunction(a: &IntSet, b: &IntSet) -> SetResult<IntSet> {
    IntSet::from_elements(
        a.iter()
            .copied()
            .filter(|v| !b.contains(*v))
            .chain(b.iter().copied().filter(|v| !a.contains(*v))),
    )
}

/// All of `a`, then the elements of `b` absent from `a`.
///
/// The only operation whose result can outgrow both operands; exceeding
/// the capacity bound fails rather than growing past it.
pub fn union(a: &IntSet, b: &IntSet) -> SetResult<IntSet> {
    IntSet::from_elements(a.iter().copied().chain(b.iter().copied()))
}

/// Elements of `a` present in `b`, in `a`'s order.
pub fn intersection(a: &IntSet, b: &IntSet) -> SetResult<IntSet> {
    IntSet::from_elements(a.iter().copied().filter(|v| b.contains(*v)))
}

/// Order-insensitive set equality: mutual containment.
pub fn equal(a: &IntSet, b: &IntSet) -> bool {
    subset(a, b) && subset(b, a)
}

/// Whether every element of `a` is an element of `b`.
pub fn subset(a: &IntSet, b: &IntSet) -> bool {
    a.iter().all(|v| b.contains(*v))
}

/// Whether `value` is an element of `set`.
pub fn contains(value: i32, set: &IntSet) -> bool {
    set.contains(value)
}

/// Number of elements in `set`.
pub fn cardinality(set: &IntSet) -> i32 {
    set.cardinality() as i32
}

// ==================== TESTS ====================
