use crate::trie::Trie;
use crate::{indices, IndexSet, Instance};

/// A full match: the common string and the pair indices in the order used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    pub order: Vec<usize>,
}

/// Read-only context shared by every search of one instance.
pub struct Matcher<'a> {
    inst: &'a Instance,
    a_trie: &'a Trie,
    b_trie: &'a Trie,
    beginning: IndexSet,
}

/// One partial sequence. Each branch extends its own copy.
#[derive(Debug, Clone, Default)]
struct State {
    a_seq: String,
    b_seq: String,
    taken: IndexSet,
    order: Vec<usize>,
}

impl<'a> Matcher<'a> {
    pub fn new(inst: &'a Instance, a_trie: &'a Trie, b_trie: &'a Trie, beginning: IndexSet) -> Self {
        Matcher {
            inst,
            a_trie,
            b_trie,
            beginning,
        }
    }

    /// Lexicographically smallest ordering of `combination` that uses every
    /// index in it exactly once and makes both sides equal.
    pub fn search(&self, combination: IndexSet) -> Option<Match> {
        debug_assert!(combination != 0, "empty combination");
        let mut best = None;
        self.dfs(combination, &State::default(), &mut best);
        best
    }

    fn candidates(&self, state: &State) -> IndexSet {
        let (a_len, b_len) = (state.a_seq.len(), state.b_seq.len());
        if a_len < b_len {
            self.a_trie.search(&state.b_seq[a_len..])
        } else if a_len > b_len {
            self.b_trie.search(&state.a_seq[b_len..])
        } else {
            self.beginning
        }
    }

    fn dfs(&self, combination: IndexSet, state: &State, best: &mut Option<Match>) {
        let pairs = self.inst.pairs();
        let start = state.a_seq.len().min(state.b_seq.len());
        let options = self.candidates(state) & combination & !state.taken;

        for s in indices(options) {
            let a_seq = state.a_seq.clone() + &pairs[s].a;
            let b_seq = state.b_seq.clone() + &pairs[s].b;
            let end = a_seq.len().min(b_seq.len());
            if a_seq.as_bytes()[start..end] != b_seq.as_bytes()[start..end] {
                continue;
            }

            // All solutions for one combination share a length, and the
            // a-side built so far is a prefix of the final string.
            if let Some(found) = best {
                let prefix = &found.text.as_bytes()[..a_seq.len().min(found.text.len())];
                if a_seq.as_bytes() > prefix {
                    continue;
                }
            }

            let taken = state.taken | 1 << s;
            let mut order = state.order.clone();
            order.push(s);

            if a_seq.len() == b_seq.len() {
                // A closed alignment before the combination is used up means a
                // smaller balanced subset matches; that one is found first.
                if taken == combination && best.as_ref().map_or(true, |b| a_seq < b.text) {
                    *best = Some(Match { text: a_seq, order });
                }
                continue;
            }

            if taken != combination {
                let next = State {
                    a_seq,
                    b_seq,
                    taken,
                    order,
                };
                self.dfs(combination, &next, best);
            }
        }
    }
}
