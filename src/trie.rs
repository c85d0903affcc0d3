use crate::hash::TokenHash;
use rustc_hash::FxHashMap;

/// One prefix position in the conditional model.
///
/// `count` is the number of inserted n-grams whose prefix passed through this
/// node, `freq` the number that terminate exactly here. `prob` is the
/// conditional probability `freq / parent count`, recomputed on every
/// insertion terminating at this node; the last insertion wins, it is not a
/// running average.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    freq: usize,
    count: usize,
    prob: f64,
    children: FxHashMap<TokenHash, TrieNode>,
}

impl TrieNode {
    #[inline(always)]
    pub(crate) fn prob(&self) -> f64 {
        self.prob
    }

    #[inline(always)]
    pub(crate) fn freq(&self) -> usize {
        self.freq
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

/// Prefix tree over hashed tokens accumulating context counts and conditional
/// probabilities for the inserted n-grams.
///
/// Strictly hierarchical: every node except the root is owned by its parent's
/// child map. Grows unboundedly with distinct n-grams; nothing is ever
/// removed.
#[derive(Debug, Default)]
pub(crate) struct ConditionalTrie {
    root: TrieNode,
}

impl ConditionalTrie {
    /// Inserts one n-gram, updating counts along its path.
    ///
    /// The final node's `prob` is derived from its parent's `count` as
    /// observed during this walk, right after the parent's increment.
    pub(crate) fn put(&mut self, key: &[TokenHash]) {
        debug_assert!(!key.is_empty(), "empty n-gram");

        let mut current = &mut self.root;
        let mut parent_count = 0;
        for &hash in key {
            current.count += 1;
            parent_count = current.count;
            current = current.children.entry(hash).or_default();
        }

        current.freq += 1;
        current.prob = current.freq as f64 / parent_count as f64;
    }

    /// Walks `key` from the root, stopping at the first missing child.
    pub(crate) fn search(&self, key: &[TokenHash]) -> Option<&TrieNode> {
        let mut node = &self.root;
        for hash in key {
            node = node.children.get(hash)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::ConditionalTrie;
    use float_cmp::approx_eq;

    #[test]
    fn test_put_tracks_counts_and_freq() {
        let mut trie = ConditionalTrie::default();
        trie.put(&[1, 2]);
        trie.put(&[1, 3]);
        trie.put(&[1, 2]);

        let prefix = trie.search(&[1]).unwrap();
        assert_eq!(prefix.count(), 3);
        assert_eq!(prefix.freq(), 0);
        assert_eq!(prefix.prob(), 0.0);

        let followed = trie.search(&[1, 2]).unwrap();
        assert_eq!(followed.freq(), 2);
        assert!(approx_eq!(f64, followed.prob(), 2.0 / 3.0, ulps = 1));
    }

    #[test]
    fn test_prob_is_last_write_not_average() {
        let mut trie = ConditionalTrie::default();
        trie.put(&[1, 2]);
        // denominator frozen at insertion time, later siblings do not refresh it
        trie.put(&[1, 3]);
        assert_eq!(trie.search(&[1, 2]).unwrap().prob(), 1.0);
        assert_eq!(trie.search(&[1, 3]).unwrap().prob(), 0.5);

        trie.put(&[1, 2]);
        assert!(approx_eq!(
            f64,
            trie.search(&[1, 2]).unwrap().prob(),
            2.0 / 3.0,
            ulps = 1
        ));
        assert_eq!(trie.search(&[1, 3]).unwrap().prob(), 0.5);
    }

    #[test]
    fn test_search_miss() {
        let mut trie = ConditionalTrie::default();
        trie.put(&[1, 2, 3]);

        assert!(trie.search(&[2]).is_none());
        assert!(trie.search(&[1, 3]).is_none());
        assert!(trie.search(&[1, 2, 3, 4]).is_none());
        assert!(trie.search(&[1, 2, 3]).is_some());
    }

    #[test]
    fn test_search_empty_key_is_root() {
        let trie = ConditionalTrie::default();
        let root = trie.search(&[]).unwrap();
        assert_eq!(root.prob(), 0.0);
    }
}
