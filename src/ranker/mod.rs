// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ranking component.
//!
//! [`PairSetRanker`] is built once per universe size N and answers rank
//! queries for perfect matchings of that universe. Construction precomputes
//! the MEMO tables (canonical pair list and base table, see [`crate::memo`]);
//! queries are pure and touch only a per-call scratch buffer, so one ranker
//! can serve many threads concurrently.

pub mod errors;

use crate::memo::{base_table, canonical_pairs, choose2, rank_bound};
use crate::pairing::{Matching, MatchingError, Pair};

pub use errors::ConfigurationError;

/// Ranks perfect matchings of a fixed even-sized universe.
///
/// # Memory Layout
///
/// Two heap tables, owned exclusively and immutable after construction:
/// - `pairs`: all C(N,2) unordered pairs in lexicographic order
/// - `bases`: (N-2)/2 mixed-radix weighting factors
///
/// For the largest universe whose rank space fits u64 this is a few KB;
/// queries clone `pairs` into a scratch buffer and filter it in place.
#[derive(Debug, Clone)]
pub struct PairSetRanker {
    universe: usize,
    pairs: Vec<Pair>,
    bases: Vec<u64>,
    rank_bound: u64,
}

impl PairSetRanker {
    /// Build a ranker for a universe of `universe` elements.
    ///
    /// Fails if `universe` is odd, below 2, above 255, or so large that the
    /// rank space does not fit in u64.
    pub fn new(universe: usize) -> Result<Self, ConfigurationError> {
        if universe < 2 {
            return Err(ConfigurationError::UniverseTooSmall { universe });
        }
        if universe % 2 != 0 {
            return Err(ConfigurationError::OddUniverse { universe });
        }
        if universe > 255 {
            return Err(ConfigurationError::UniverseTooLarge { universe });
        }

        let bases =
            base_table(universe).ok_or(ConfigurationError::RankOverflow { universe })?;
        let rank_bound = rank_bound(universe, &bases)
            .ok_or(ConfigurationError::RankOverflow { universe })?;

        Ok(Self {
            universe,
            pairs: canonical_pairs(universe),
            bases,
            rank_bound,
        })
    }

    /// The universe size N.
    pub fn universe_size(&self) -> usize {
        self.universe
    }

    /// Number of canonical pairs, C(N, 2).
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Number of ranking rounds, (N-2)/2.
    ///
    /// The final pair of a matching is forced and never consulted.
    pub fn round_count(&self) -> usize {
        self.bases.len()
    }

    /// Exclusive upper bound on every rank this ranker can return.
    ///
    /// Equals the product of all rounds' eligible-pair counts, N!/2^(N/2).
    pub fn rank_bound(&self) -> u64 {
        self.rank_bound
    }

    /// The canonical lexicographic pair list.
    pub fn canonical_pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Compute the rank of a perfect matching.
    ///
    /// The matching's pairs are consumed in their stored order, one round
    /// each (the last pair is forced and skipped). At every round the pair's
    /// position within the surviving eligible pairs is weighted by that
    /// round's base and added to the rank. Pairs overlapping the consumed
    /// pair are dropped from the eligible set, disjoint pairs survive.
    ///
    /// Fails only if the matching was validated for a different universe
    /// size; all shape errors were already caught by [`Matching::new`].
    pub fn rank(&self, matching: &Matching) -> Result<u64, MatchingError> {
        if matching.universe() != self.universe {
            return Err(MatchingError::UniverseMismatch {
                matching: matching.universe(),
                ranker: self.universe,
            });
        }

        let mut remaining = self.pairs.clone();
        let mut num_remaining = remaining.len();
        let mut rank = 0u64;

        for (n, &s_pair) in matching.pairs()[..self.bases.len()].iter().enumerate() {
            let mut write = 0;
            for r in 0..num_remaining {
                let r_pair = remaining[r];
                if r_pair == s_pair {
                    rank += r as u64 * self.bases[n];
                } else if r_pair.is_disjoint(s_pair) {
                    remaining[write] = r_pair;
                    write += 1;
                }
            }
            // A validated matching's pair is always found among the
            // survivors, and exactly choose2(N - 2n - 2) pairs remain.
            debug_assert_eq!(write as u64, choose2(self.universe - 2 * n - 2));
            num_remaining = write;
        }

        debug_assert!(rank < self.rank_bound);
        Ok(rank)
    }
}
