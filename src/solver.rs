use crate::filter::{length_balance_filter, multiset_balance_filter, postfix_filter, prefix_filter};
use crate::matcher::{Match, Matcher};
use crate::trie::Trie;
use crate::Instance;
use log::debug;
use rayon::prelude::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sequence(String),
    Impossible,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sequence(s) => f.write_str(s),
            Outcome::Impossible => f.write_str("IMPOSSIBLE"),
        }
    }
}

/// Shortest, then lexicographically smallest, match for the instance.
pub fn solve(inst: &Instance) -> Outcome {
    solve_match(inst).map_or(Outcome::Impossible, |m| Outcome::Sequence(m.text))
}

/// Like [`solve`], but also reports which pairs were used and in what order.
pub fn solve_match(inst: &Instance) -> Option<Match> {
    let a_trie = Trie::build(inst.a_strings());
    let b_trie = Trie::build(inst.b_strings());

    let beginning = prefix_filter(inst);
    if beginning == 0 {
        debug!("no pair can open a sequence");
        return None;
    }
    let ending = postfix_filter(inst);
    if ending == 0 {
        debug!("no pair can close a sequence");
        return None;
    }

    let groups = length_balance_filter(inst, beginning, ending);
    debug!(
        "{} length-balanced combinations",
        groups.values().map(Vec::len).sum::<usize>()
    );
    let groups = multiset_balance_filter(inst, groups);
    debug!(
        "{} multiset-balanced combinations in {} length groups",
        groups.values().map(Vec::len).sum::<usize>(),
        groups.len()
    );

    let matcher = Matcher::new(inst, &a_trie, &b_trie, beginning);
    // Every combination in a group yields a string of the same length, so the
    // first group with any match holds the answer.
    for (length, combinations) in &groups {
        let best = combinations
            .par_iter()
            .filter_map(|&combination| matcher.search(combination))
            .min_by(|x, y| x.text.cmp(&y.text).then_with(|| x.order.cmp(&y.order)));
        if let Some(found) = best {
            debug!("match of length {} using pairs {:?}", length, found.order);
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pair;

    fn instance(pairs: &[(&str, &str)]) -> Instance {
        Instance::new(pairs.iter().map(|&(a, b)| Pair::new(a, b)).collect()).unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::Sequence("abc".into()).to_string(), "abc");
        assert_eq!(Outcome::Impossible.to_string(), "IMPOSSIBLE");
    }

    #[test]
    fn no_opening_pair() {
        assert_eq!(solve(&instance(&[("a", "b")])), Outcome::Impossible);
    }

    #[test]
    fn no_closing_pair() {
        // "ab"/"a" opens but nothing can close.
        assert_eq!(solve(&instance(&[("ab", "a"), ("c", "b")])), Outcome::Impossible);
    }

    #[test]
    fn trivial_pair() {
        assert_eq!(solve(&instance(&[("ab", "ab")])), Outcome::Sequence("ab".into()));
    }

    #[test]
    fn smallest_across_combinations_of_one_length() {
        // {efgh} and {abc/ab, d/cd} both give length 4; "abcd" is smaller.
        let inst = instance(&[("efgh", "efgh"), ("d", "cd"), ("abc", "ab")]);
        assert_eq!(solve(&inst), Outcome::Sequence("abcd".into()));
    }

    #[test]
    fn non_ascii_pair() {
        assert_eq!(solve(&instance(&[("é", "é")])), Outcome::Sequence("é".into()));
    }

    #[test]
    fn shorter_beats_smaller() {
        let inst = instance(&[("ab", "ab"), ("z", "z")]);
        assert_eq!(solve(&inst), Outcome::Sequence("z".into()));
    }
}
