use crate::IndexSet;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct Node {
    children: BTreeMap<u8, Node>,
    /// Strings that end exactly here.
    end: IndexSet,
    /// Strings that continue past this node.
    part: IndexSet,
}

/// Prefix tree over one side (all a-strings or all b-strings) of an instance.
#[derive(Debug, Clone)]
pub struct Trie {
    root: Node,
}

impl Trie {
    /// Builds the trie; string `i` of the iterator gets index `i`.
    pub fn build<'a>(strings: impl IntoIterator<Item = &'a str>) -> Self {
        let mut root = Node::default();
        for (idx, s) in strings.into_iter().enumerate() {
            debug_assert!(!s.is_empty());
            let bit: IndexSet = 1 << idx;
            // Every string is non-empty, so the root is a strict prefix of all.
            root.part |= bit;
            let mut node = &mut root;
            for &c in s.as_bytes() {
                node = node.children.entry(c).or_default();
                node.part |= bit;
            }
            node.part &= !bit;
            node.end |= bit;
        }
        Trie { root }
    }

    /// Indices whose string could be appended against `pending`: those equal
    /// to a prefix of `pending`, plus, if `pending` is fully present, those
    /// having `pending` as a strict prefix.
    pub fn search(&self, pending: &str) -> IndexSet {
        debug_assert!(!pending.is_empty(), "trie queried with an empty string");
        let mut found = 0;
        let mut node = &self.root;
        for c in pending.bytes() {
            match node.children.get(&c) {
                Some(child) => {
                    node = child;
                    found |= node.end;
                }
                None => return found,
            }
        }
        found | node.part
    }
}
