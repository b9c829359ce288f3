// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for matching validation.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Everything that can be wrong with a caller-supplied matching.
///
/// Validation is eager: a malformed matching is rejected before any rank
/// arithmetic runs, so a bogus input can never silently produce a colliding
/// or out-of-range rank.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum MatchingError {
    /// The matching does not contain exactly N/2 pairs.
    WrongPairCount { expected: usize, actual: usize },

    /// A pair endpoint lies outside the universe `[0, N)`.
    ElementOutOfRange { element: u8, universe: usize },

    /// An element appears in more than one pair.
    ///
    /// With the pair count and range already checked, a matching that omits
    /// an element necessarily repeats another, so this variant also covers
    /// incomplete coverage of the universe.
    DuplicateElement { element: u8 },

    /// The matching was built for a different universe size than the ranker.
    UniverseMismatch { matching: usize, ranker: usize },
}

impl fmt::Display for MatchingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchingError::WrongPairCount { expected, actual } => {
                write!(f, "Matching has {} pairs, expected {}", actual, expected)
            }
            MatchingError::ElementOutOfRange { element, universe } => {
                write!(
                    f,
                    "Element {} is outside the universe [0, {})",
                    element, universe
                )
            }
            MatchingError::DuplicateElement { element } => {
                write!(f, "Element {} appears in more than one pair", element)
            }
            MatchingError::UniverseMismatch { matching, ranker } => {
                write!(
                    f,
                    "Matching over {} elements given to a ranker over {}",
                    matching, ranker
                )
            }
        }
    }
}
