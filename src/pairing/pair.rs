// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unordered pairs of elements.
//!
//! An element is a `u8` identifier in `[0, N)` for a universe of size N.
//! A pair is an unordered 2-element subset, stored canonically as (lo, hi)
//! with lo < hi. Degenerate pairs such as (3, 3) are unrepresentable.

use std::fmt;

/// An unordered pair of distinct elements, stored as (lo, hi) with lo < hi.
///
/// This is a newtype-style wrapper to provide type safety: the canonical
/// orientation is established at construction, so two pairs over the same
/// two elements always compare equal, and the derived `Ord` is exactly the
/// lexicographic order the canonical pair list is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    lo: u8,
    hi: u8,
}

impl Pair {
    /// Create a new pair from two distinct elements, panicking if they are equal.
    ///
    /// The arguments may be given in either order.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn new(a: u8, b: u8) -> Self {
        assert!(a != b, "Degenerate pair: ({}, {})", a, b);
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Try to create a new pair, returning None if the elements are equal.
    pub fn try_new(a: u8, b: u8) -> Option<Self> {
        if a == b {
            None
        } else {
            Some(Self::new(a, b))
        }
    }

    /// The smaller element.
    pub fn lo(self) -> u8 {
        self.lo
    }

    /// The larger element.
    pub fn hi(self) -> u8 {
        self.hi
    }

    /// Whether `element` is one of the two endpoints.
    pub fn contains(self, element: u8) -> bool {
        self.lo == element || self.hi == element
    }

    /// Whether this pair shares no element with `other`.
    ///
    /// Equal pairs are not disjoint. Pairs sharing exactly one element are
    /// not disjoint either; during ranking those are the pairs that drop out
    /// of the eligible set once `other` is consumed.
    pub fn is_disjoint(self, other: Pair) -> bool {
        !other.contains(self.lo) && !other.contains(self.hi)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}
