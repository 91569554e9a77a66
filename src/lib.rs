//! Solver for the "limited correspondence" variant of the Post Correspondence
//! Problem: every pair may be used at most once, and the answer is the
//! shortest, then lexicographically smallest, matching string.
//!
//! The search enumerates every subset of pairs, so instances are expected to
//! be contest sized (a dozen or so pairs).

pub mod filter;
pub mod input;
pub mod matcher;
pub mod solver;
pub mod trie;

use anyhow::{bail, Result};

pub use solver::{solve, Outcome};

/// One bit per pair index.
pub type IndexSet = u64;

/// Largest instance an [`IndexSet`] can describe.
pub const MAX_PAIRS: usize = IndexSet::BITS as usize;

/// Iterates the indices whose bits are set, in ascending order.
pub fn indices(mut set: IndexSet) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        (set != 0).then(|| {
            let idx = set.trailing_zeros() as usize;
            set &= set - 1;
            idx
        })
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub a: String,
    pub b: String,
}

impl Pair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Pair {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// A validated problem instance: 1..=64 pairs of non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pairs: Vec<Pair>,
}

impl Instance {
    pub fn new(pairs: Vec<Pair>) -> Result<Self> {
        if pairs.is_empty() {
            bail!("instance has no pairs");
        }
        if pairs.len() > MAX_PAIRS {
            bail!("instance has {} pairs, at most {} supported", pairs.len(), MAX_PAIRS);
        }
        for (idx, pair) in pairs.iter().enumerate() {
            if pair.a.is_empty() || pair.b.is_empty() {
                bail!("pair {} has an empty string", idx);
            }
        }
        Ok(Instance { pairs })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn a_strings(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.a.as_str())
    }

    pub fn b_strings(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.b.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_ascending() {
        assert_eq!(indices(0b1011_0000).collect::<Vec<_>>(), vec![4, 5, 7]);
        assert_eq!(indices(0).count(), 0);
        assert_eq!(indices(IndexSet::MAX).count(), MAX_PAIRS);
    }

    #[test]
    fn instance_validation() {
        assert!(Instance::new(vec![]).is_err());
        assert!(Instance::new(vec![Pair::new("", "a")]).is_err());
        let too_many = vec![Pair::new("a", "a"); MAX_PAIRS + 1];
        assert!(Instance::new(too_many).is_err());
        assert!(Instance::new(vec![Pair::new("a", "a"); MAX_PAIRS]).is_ok());
        assert!(Instance::new(vec![Pair::new("é", "ab")]).is_ok());
    }
}
