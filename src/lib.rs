//! # N-gram frequency model for spelling-correction ranking
//!
//! Learns unigram probabilities and conditional bigram/trigram probabilities
//! from a training token stream, then scores how plausible a token or short
//! token sequence is. The score is meant to rank spelling-correction
//! candidates; candidate generation, tokenization and normalization are up to
//! the caller, and queries must be normalized the same way as the training
//! corpus.
//!
//! Tokens are reduced to 64-bit hashes on entry and never stored as strings;
//! hash collisions between distinct tokens are an accepted, undetected risk.
//! N-grams never seen in training score exactly `0.0` (no smoothing).
//!
//! # Example
//! ```rust
//! use spellgram::{FrequencyModel, ModelConfig};
//!
//! let tokens: Vec<String> = "the cat sat the cat ran"
//!     .split_whitespace()
//!     .map(str::to_owned)
//!     .collect();
//!
//! // drop tokens seen fewer than 2 times
//! let mut model = FrequencyModel::new(ModelConfig::new(1, 2));
//! model.load(&tokens);
//!
//! assert_eq!(model.get(&["the"]), 2.0 / 6.0);
//! assert_eq!(model.get(&["the", "cat"]), 1.0);
//! // "sat" is too rare, so the bigram was never modeled
//! assert_eq!(model.get(&["cat", "sat"]), 0.0);
//! ```

mod hash;
mod model;
mod ngram_size;
mod ngrams;
mod trie;

pub use hash::TokenHash;
pub use model::{FrequencyModel, ModelConfig};
pub use ngram_size::NgramSize;
pub use ngrams::windows;
