//! The canonical integer-set value.
//!
//! An `IntSet` is a duplicate-free sequence of 32-bit signed integers with a
//! fixed capacity bound. Element order is whatever the constructing component
//! chose (first occurrence for the parser, left-operand-first for the
//! algebra) and is preserved verbatim by the renderer and the wire codec.
//! Order is not part of set semantics: the derived `PartialEq` compares
//! representations, while order-insensitive equality lives in
//! `intset-algebra`.

use std::fmt;

use crate::{SetError, SetResult};

/// Maximum number of distinct elements a set value may hold.
pub const MAX_CAPACITY: usize = 500;

/// A canonical, capacity-bounded set of 32-bit signed integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntSet {
    /// Distinct elements in insertion order.
    elements: Vec<i32>,
}

impl IntSet {
    /// Create an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from raw elements, dropping duplicates.
    ///
    /// Elements are kept in first-occurrence order. Fails with
    /// `CapacityExceeded` once a 501st distinct value shows up; the bound is
    /// checked before every insertion, so no oversized buffer is ever
    /// materialized.
    pub fn from_elements<I>(elements: I) -> SetResult<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut set = Self::empty();
        for value in elements {
            set.push_unique(value)?;
        }
        Ok(set)
    }

    /// Wrap an element sequence that is already duplicate-free.
    ///
    /// The caller vouches for distinctness (the binary decoder trusts its
    /// own header rather than re-deduplicating); only the capacity bound is
    /// enforced here.
    pub fn from_canonical(elements: Vec<i32>) -> SetResult<Self> {
        if elements.len() > MAX_CAPACITY {
            return Err(SetError::CapacityExceeded { limit: MAX_CAPACITY });
        }
        Ok(Self { elements })
    }

    /// Append `value` unless it is already present.
    fn push_unique(&mut self, value: i32) -> SetResult<()> {
        if self.contains(value) {
            return Ok(());
        }
        if self.elements.len() == MAX_CAPACITY {
            return Err(SetError::CapacityExceeded { limit: MAX_CAPACITY });
        }
        self.elements.push(value);
        Ok(())
    }

    /// Number of elements.
    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Membership test (linear scan).
    pub fn contains(&self, value: i32) -> bool {
        self.elements.contains(&value)
    }

    /// Iterate over the elements in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.elements.iter()
    }

    /// The elements as a slice, in stored order.
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }
}

impl fmt::Display for IntSet {
    /// Render as `{e1, e2, ...}`, one comma-space between elements, no
    /// padding inside the braces. The empty set renders as `{}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}

// ==================== TESTS ====================
