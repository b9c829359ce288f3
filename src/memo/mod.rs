// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! This module contains the precomputed tables a ranker is built from:
//! - The canonical lexicographic list of all unordered pairs over N elements
//! - The mixed-radix base table weighting each ranking round's choice
//!
//! Both are computed once at ranker construction and never mutated.

pub mod bases;
pub mod pairs;

pub use bases::{base_table, choose2, rank_bound};
pub use pairs::canonical_pairs;
