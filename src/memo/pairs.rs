// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical pair enumeration.
//!
//! The ranking algorithm indexes into the list of all C(N,2) unordered pairs
//! of `{0, .., N-1}`, generated in lexicographic order by (first element,
//! second element). This ordering is the reference frame every rank is
//! computed against, so it must be reproduced exactly and never reordered.

use crate::pairing::Pair;

/// Generate all unordered pairs over a universe of `universe` elements,
/// in lexicographic order: (0,1), (0,2), .., (0,N-1), (1,2), .., (N-2,N-1).
///
/// Output length is exactly `universe * (universe - 1) / 2`. The caller is
/// responsible for `universe` being valid (even, in `[2, 256)`); the ranker
/// checks this before calling.
pub fn canonical_pairs(universe: usize) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(universe * (universe - 1) / 2);
    for lo in 0..universe {
        for hi in lo + 1..universe {
            pairs.push(Pair::new(lo as u8, hi as u8));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_n_choose_2() {
        for universe in [2, 4, 6, 8, 12] {
            let pairs = canonical_pairs(universe);
            assert_eq!(pairs.len(), universe * (universe - 1) / 2);
        }
    }

    #[test]
    fn test_n4_exact_order() {
        let expected = [
            Pair::new(0, 1),
            Pair::new(0, 2),
            Pair::new(0, 3),
            Pair::new(1, 2),
            Pair::new(1, 3),
            Pair::new(2, 3),
        ];
        assert_eq!(canonical_pairs(4), expected);
    }

    #[test]
    fn test_strictly_increasing() {
        let pairs = canonical_pairs(10);
        for window in pairs.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_every_pair_appears_once() {
        let universe = 8;
        let pairs = canonical_pairs(universe);
        for lo in 0..universe as u8 {
            for hi in lo + 1..universe as u8 {
                assert_eq!(
                    pairs.iter().filter(|p| **p == Pair::new(lo, hi)).count(),
                    1
                );
            }
        }
    }
}
