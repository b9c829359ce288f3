// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mixed-radix base table precomputation.
//!
//! Ranking runs in (N-2)/2 rounds; the last pair of a matching is forced and
//! gets no round. At the start of round n, N-2n elements are unassigned and
//! C(N-2n, 2) pairs over them are still eligible. Each round's choice index
//! is weighted by the product of all later rounds' eligible-pair counts,
//! giving a positional system where every distinct sequence of round choices
//! maps to a distinct integer below [`rank_bound`].
//!
//! All products are overflow-checked; a universe too large for u64 ranks is
//! rejected at ranker construction rather than wrapping silently.

/// Number of unordered pairs over `n` elements: C(n, 2).
pub fn choose2(n: usize) -> u64 {
    if n < 2 {
        return 0;
    }
    (n as u64) * (n as u64 - 1) / 2
}

/// Compute the base table for a universe of `universe` elements.
///
/// The table has `(universe - 2) / 2` entries, one per round:
/// `base[last] = 1`, and `base[i] = base[i + 1] * C(universe - 2i - 2, 2)`.
/// For `universe == 2` there are no rounds and the table is empty.
///
/// Returns `None` if any product overflows u64.
pub fn base_table(universe: usize) -> Option<Vec<u64>> {
    let rounds = (universe - 2) / 2;
    let mut bases = vec![1u64; rounds];

    for i in (0..rounds.saturating_sub(1)).rev() {
        bases[i] = bases[i + 1].checked_mul(choose2(universe - 2 * i - 2))?;
    }

    Some(bases)
}

/// Exclusive upper bound on ranks for a universe of `universe` elements:
/// the product of all rounds' eligible-pair counts, `N! / 2^(N/2)`.
///
/// Every rank is strictly below this bound, and every integer below it is
/// the rank of exactly one ordered pair sequence. Returns `None` on u64
/// overflow.
pub fn rank_bound(universe: usize, bases: &[u64]) -> Option<u64> {
    match bases.first() {
        // base[0] already carries every later round's radix.
        Some(&first) => first.checked_mul(choose2(universe)),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose2() {
        assert_eq!(choose2(2), 1);
        assert_eq!(choose2(4), 6);
        assert_eq!(choose2(6), 15);
        assert_eq!(choose2(8), 28);
    }

    #[test]
    fn test_base_table_small_universes() {
        assert_eq!(base_table(2).unwrap(), Vec::<u64>::new());
        assert_eq!(base_table(4).unwrap(), vec![1]);
        assert_eq!(base_table(6).unwrap(), vec![6, 1]);
        assert_eq!(base_table(8).unwrap(), vec![90, 6, 1]);
        assert_eq!(base_table(10).unwrap(), vec![2520, 90, 6, 1]);
    }

    #[test]
    fn test_base_recurrence() {
        let universe = 12;
        let bases = base_table(universe).unwrap();
        assert_eq!(bases.len(), (universe - 2) / 2);
        assert_eq!(*bases.last().unwrap(), 1);
        for i in 0..bases.len() - 1 {
            assert_eq!(bases[i], bases[i + 1] * choose2(universe - 2 * i - 2));
        }
    }

    #[test]
    fn test_rank_bound_is_product_of_round_radixes() {
        for universe in [2usize, 4, 6, 8, 10] {
            let bases = base_table(universe).unwrap();
            let rounds = (universe - 2) / 2;
            let expected: u64 = (0..rounds).map(|n| choose2(universe - 2 * n)).product();
            assert_eq!(rank_bound(universe, &bases).unwrap(), expected);
        }
        // N! / 2^(N/2) spot checks
        assert_eq!(rank_bound(4, &base_table(4).unwrap()).unwrap(), 6);
        assert_eq!(rank_bound(6, &base_table(6).unwrap()).unwrap(), 90);
        assert_eq!(rank_bound(8, &base_table(8).unwrap()).unwrap(), 2520);
    }

    #[test]
    fn test_overflow_detected_for_huge_universe() {
        // 64! / 2^32 far exceeds u64::MAX.
        assert!(base_table(64).is_none() || rank_bound(64, &base_table(64).unwrap()).is_none());
    }
}
