use crate::{
    hash::{hash_token, TokenHash},
    ngrams,
    trie::ConditionalTrie,
};
use ::std::time::Instant;
use ahash::AHashSet;
use itertools::Itertools;
use rustc_hash::FxHashMap;

mod config;

pub use config::ModelConfig;

type UnigramProbs = FxHashMap<TokenHash, f64>;

/// Frequency model over a tokenized training corpus.
///
/// [`load`](Self::load) builds a unigram probability table and a conditional
/// bigram/trigram trie from the stream; [`get`](Self::get) scores a token or
/// short token sequence against them. Queries must be tokenized and
/// normalized the same way as the training data, since lookup is
/// exact-hash-based.
///
/// Unseen n-grams score exactly `0.0`: there is no smoothing or back-off.
/// Hash collisions between distinct tokens are an accepted, undetected risk.
#[derive(Debug, Default)]
pub struct FrequencyModel {
    config: ModelConfig,
    unigram_probs: UnigramProbs,
    trie: ConditionalTrie,
}

impl FrequencyModel {
    #[inline]
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            unigram_probs: UnigramProbs::default(),
            trie: ConditionalTrie::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Trains the model on an ordered token stream.
    ///
    /// Hashes every token, counts unigram occurrences, blacklists hashes of
    /// tokens shorter than `min_word_length` chars or rarer than
    /// `min_frequency` (either criterion alone suffices), stores
    /// `count / total` for the survivors and inserts every window of the
    /// enabled sizes that contains no blacklisted hash into the trie.
    ///
    /// Empty input is valid and yields an empty model. Calling `load` again
    /// accumulates: trie counts keep growing and unigram probabilities are
    /// overwritten from the new stream only. Accumulation is a documented
    /// behavior, not a supported use case.
    pub fn load<S: AsRef<str>>(&mut self, tokens: &[S]) {
        let counting = Instant::now();

        let mut hashes = Vec::with_capacity(tokens.len());
        let mut unigram_counts: FxHashMap<TokenHash, usize> = FxHashMap::default();
        let mut blacklist: AHashSet<TokenHash> = AHashSet::new();
        for token in tokens {
            let token = token.as_ref();
            let hash = hash_token(token);
            hashes.push(hash);
            *unigram_counts.entry(hash).or_default() += 1;
            if token.chars().count() < self.config.min_word_length {
                blacklist.insert(hash);
            }
        }

        let total = tokens.len() as f64;
        for (&hash, &count) in &unigram_counts {
            if count < self.config.min_frequency {
                blacklist.insert(hash);
            } else if !blacklist.contains(&hash) {
                self.unigram_probs.insert(hash, count as f64 / total);
            }
        }
        tracing::debug!(
            tokens = tokens.len(),
            unigrams = self.unigram_probs.len(),
            blacklisted = blacklist.len(),
            elapsed = ?counting.elapsed(),
            "hashed tokens and built unigram table"
        );

        let inserting = Instant::now();
        for &size in &self.config.ngram_sizes {
            for window in ngrams::windows(&hashes, size.len()) {
                if window.iter().any(|hash| blacklist.contains(hash)) {
                    continue;
                }
                self.trie.put(window);
            }
        }
        tracing::debug!(elapsed = ?inserting.elapsed(), "inserted windows into trie");
    }

    /// Probability of a token (unigram table) or token sequence (trie).
    ///
    /// Returns `0.0` for anything not modeled, which is indistinguishable
    /// from a genuinely zero-probability match; use
    /// [`contains`](Self::contains) to test presence explicitly. An empty
    /// query is undefined input; it currently returns `0.0`, but callers must
    /// not rely on that.
    pub fn get<S: AsRef<str>>(&self, tokens: &[S]) -> f64 {
        let hashes = tokens.iter().map(|t| hash_token(t.as_ref())).collect_vec();
        match hashes.as_slice() {
            [hash] => self.unigram_probs.get(hash).copied().unwrap_or(0.0),
            key => self.trie.search(key).map_or(0.0, |node| node.prob()),
        }
    }

    /// Whether the exact token or token sequence was modeled during training.
    ///
    /// For sequences this requires a window to have terminated at the node,
    /// not merely a longer n-gram to have passed through it.
    pub fn contains<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let hashes = tokens.iter().map(|t| hash_token(t.as_ref())).collect_vec();
        match hashes.as_slice() {
            [hash] => self.unigram_probs.contains_key(hash),
            key => self.trie.search(key).is_some_and(|node| node.freq() > 0),
        }
    }
}
