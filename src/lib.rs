// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense ranking of perfect matchings for pattern database indexing.
//!
//! A perfect matching partitions an even-sized universe of N labeled elements
//! into N/2 disjoint unordered pairs. This crate maps any such matching to a
//! compact integer rank, suitable as an index into a precomputed heuristic
//! lookup table (a pattern database) in a search-based solver.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed at construction for a fixed universe size N, never mutated:
//! - The canonical lexicographic list of all C(N,2) unordered pairs
//! - The mixed-radix base table, one weighting factor per ranking round
//!
//! ## Tier 2: Query State (Per-call)
//!
//! Each rank query filters its own scratch copy of the canonical pair list,
//! one round per input pair. No shared mutation occurs, so a single
//! [`PairSetRanker`] can serve concurrent callers without locking.
//!
//! # Ranking Algorithm
//!
//! There are (N-2)/2 rounds; the final pair of a matching is forced once all
//! other elements are assigned and is never consulted. At round n the scratch
//! list holds exactly the pairs over the N-2n still-unassigned elements, in
//! canonical order. The position of the round's input pair within that list
//! is the round's choice index; it is weighted by the base table entry (the
//! product of all later rounds' eligible-pair counts) and summed into the
//! rank. Pairs sharing one element with the consumed pair are dropped, the
//! rest survive into the next round.
//!
//! The sum is a bijection between ordered pair sequences and
//! `[0, N!/2^(N/2))`. Callers that fix the canonical input convention
//! (pairs sorted by first element, see [`Matching::into_canonical`]) get
//! distinct ranks for distinct matchings.
//!
//! # Example
//!
//! ```
//! use pairset_rank::{Matching, Pair, PairSetRanker};
//!
//! let ranker = PairSetRanker::new(4).unwrap();
//! let matching = Matching::new(4, vec![Pair::new(0, 1), Pair::new(2, 3)]).unwrap();
//! assert_eq!(ranker.rank(&matching).unwrap(), 0);
//! ```
//!
//! # References
//!
//! - Korf, R. E. (1997). "Finding optimal solutions to Rubik's Cube using
//!   pattern databases." AAAI-97.
//! - Culberson, J. C. and Schaeffer, J. (1998). "Pattern databases."
//!   Computational Intelligence 14(3).

pub mod memo;
pub mod pairing;
pub mod ranker;

// Re-export commonly used types
pub use pairing::{Matching, MatchingError, Pair};
pub use ranker::{ConfigurationError, PairSetRanker};
