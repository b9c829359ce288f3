// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated perfect matchings.
//!
//! A perfect matching of a universe of size N is a set of N/2 disjoint pairs
//! covering every element exactly once. [`Matching`] owns a shape-checked
//! sequence of pairs; the checks run once at construction so the ranker can
//! assume a well-formed input.
//!
//! # Ordering convention
//!
//! The pairs keep the order the caller supplied them in. The ranking
//! algorithm consumes them in that order, so the rank of a matching depends
//! on it; two orderings of the same pairs still denote the same underlying
//! matching. Callers wanting one rank per matching should fix an order —
//! [`Matching::into_canonical`] sorts by first element, the convention used
//! throughout this crate's tests.

use crate::pairing::{MatchingError, Pair};

/// A validated perfect matching of a fixed universe.
///
/// Invariants established at construction and never violated afterwards:
/// - exactly `universe / 2` pairs,
/// - every endpoint in `[0, universe)`,
/// - no element appears twice (so every element appears exactly once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    universe: usize,
    pairs: Vec<Pair>,
}

impl Matching {
    /// Validate `pairs` as a perfect matching of `universe` elements.
    ///
    /// The supplied pair order is preserved. Validation is eager and checks,
    /// in order: pair count, element range, element uniqueness. Count, range
    /// and uniqueness together imply full coverage of the universe.
    pub fn new(universe: usize, pairs: Vec<Pair>) -> Result<Self, MatchingError> {
        if pairs.len() != universe / 2 {
            return Err(MatchingError::WrongPairCount {
                expected: universe / 2,
                actual: pairs.len(),
            });
        }

        let mut seen = vec![false; universe];
        for pair in &pairs {
            for element in [pair.lo(), pair.hi()] {
                if element as usize >= universe {
                    return Err(MatchingError::ElementOutOfRange { element, universe });
                }
                if seen[element as usize] {
                    return Err(MatchingError::DuplicateElement { element });
                }
                seen[element as usize] = true;
            }
        }

        Ok(Self { universe, pairs })
    }

    /// The universe size N this matching was validated against.
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// The pairs, in the order the caller supplied them.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Reorder the pairs into the canonical convention: ascending by first
    /// element (each pair already stores (lo, hi) with lo < hi, so this is
    /// plain lexicographic order).
    pub fn into_canonical(mut self) -> Self {
        self.pairs.sort();
        self
    }
}
