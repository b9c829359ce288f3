// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Type-safe domain primitives for perfect matchings.
//!
//! This module contains the typed building blocks of a rank query:
//! - Pair: canonical unordered pair of elements (lo, hi) with lo < hi
//! - Matching: a validated perfect matching of a fixed universe
//! - MatchingError: everything that can be wrong with a supplied matching

pub mod errors;
pub mod matching;
pub mod pair;

// Re-export for convenience
pub use errors::MatchingError;
pub use matching::Matching;
pub use pair::Pair;
