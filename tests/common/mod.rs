// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use pairset_rank::{Matching, Pair};

/// Enumerate every perfect matching of `{0, .., universe-1}`, each with its
/// pairs in canonical order (ascending by first element).
///
/// Works by always pairing the smallest unused element with each larger
/// unused element in turn, so the output has exactly (universe-1)!! entries
/// and no duplicates.
pub fn all_matchings(universe: usize) -> Vec<Matching> {
    let mut used = vec![false; universe];
    let mut current = Vec::with_capacity(universe / 2);
    let mut out = Vec::new();
    extend_matching(universe, &mut used, &mut current, &mut out);
    out
}

fn extend_matching(
    universe: usize,
    used: &mut [bool],
    current: &mut Vec<Pair>,
    out: &mut Vec<Matching>,
) {
    let lo = match (0..universe).find(|&e| !used[e]) {
        Some(e) => e,
        None => {
            out.push(Matching::new(universe, current.clone()).unwrap());
            return;
        }
    };

    used[lo] = true;
    for hi in lo + 1..universe {
        if used[hi] {
            continue;
        }
        used[hi] = true;
        current.push(Pair::new(lo as u8, hi as u8));
        extend_matching(universe, used, current, out);
        current.pop();
        used[hi] = false;
    }
    used[lo] = false;
}

/// All orderings of a matching's pairs, each revalidated as a `Matching`.
pub fn all_orderings(matching: &Matching) -> Vec<Matching> {
    let mut pairs = matching.pairs().to_vec();
    let mut out = Vec::new();
    permute(&mut pairs, 0, &mut |perm| {
        out.push(Matching::new(matching.universe(), perm.to_vec()).unwrap());
    });
    out
}

fn permute(pairs: &mut [Pair], start: usize, visit: &mut impl FnMut(&[Pair])) {
    if start == pairs.len() {
        visit(pairs);
        return;
    }
    for i in start..pairs.len() {
        pairs.swap(start, i);
        permute(pairs, start + 1, visit);
        pairs.swap(start, i);
    }
}

/// Double factorial (universe - 1)!!, the number of perfect matchings.
pub fn double_factorial_of_predecessor(universe: usize) -> usize {
    (1..universe).step_by(2).product()
}
