//! Necessary conditions on the set of pairs a solution uses. Each filter only
//! throws away subsets that provably cannot be ordered into a match.

use crate::{indices, IndexSet, Instance};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Candidate subsets grouped by the common length, in characters, of their
/// a- and b-sides.
pub type Groups = BTreeMap<usize, Vec<IndexSet>>;

fn select(inst: &Instance, keep: impl Fn(&str, &str) -> bool) -> IndexSet {
    inst.pairs()
        .iter()
        .enumerate()
        .filter(|(_, p)| keep(&p.a, &p.b))
        .fold(0, |set: IndexSet, (idx, _)| set | 1 << idx)
}

/// Pairs that can open a sequence: one side is a prefix of the other.
pub fn prefix_filter(inst: &Instance) -> IndexSet {
    select(inst, |a, b| a.starts_with(b) || b.starts_with(a))
}

/// Pairs that can close a sequence: one side is a suffix of the other.
pub fn postfix_filter(inst: &Instance) -> IndexSet {
    select(inst, |a, b| a.ends_with(b) || b.ends_with(a))
}

/// Every non-empty subset whose a- and b-lengths agree and that contains at
/// least one opening and one closing pair. Subsets come out by size, then in
/// lexicographic index order.
pub fn length_balance_filter(inst: &Instance, beginning: IndexSet, ending: IndexSet) -> Groups {
    let n = inst.len();
    let a_len = inst.a_strings().map(|s| s.chars().count()).collect_vec();
    let b_len = inst.b_strings().map(|s| s.chars().count()).collect_vec();

    let balanced: Vec<(usize, IndexSet)> = (1..=n)
        .into_par_iter()
        .flat_map_iter(|k| {
            let (a_len, b_len) = (&a_len, &b_len);
            (0..n).combinations(k).filter_map(move |combination| {
                let a_sum: usize = combination.iter().map(|&i| a_len[i]).sum();
                let b_sum: usize = combination.iter().map(|&i| b_len[i]).sum();
                let set: IndexSet = combination.iter().fold(0, |set, &i| set | 1 << i);
                (a_sum == b_sum && set & beginning != 0 && set & ending != 0)
                    .then_some((a_sum, set))
            })
        })
        .collect();

    let mut groups = Groups::new();
    for (length, set) in balanced {
        groups.entry(length).or_default().push(set);
    }
    groups
}

/// Keeps subsets whose a-side and b-side use the same characters the same
/// number of times.
pub fn multiset_balance_filter(inst: &Instance, groups: Groups) -> Groups {
    let pairs = inst.pairs();
    groups
        .into_iter()
        .filter_map(|(length, sets)| {
            let kept = sets
                .into_iter()
                .filter(|&set| {
                    let a = indices(set).flat_map(|i| pairs[i].a.chars()).counts();
                    let b = indices(set).flat_map(|i| pairs[i].b.chars()).counts();
                    a == b
                })
                .collect_vec();
            (!kept.is_empty()).then_some((length, kept))
        })
        .collect()
}
