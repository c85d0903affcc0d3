use crate::ngram_size::{NgramSize, NgramSizes, NgramSizesTrait};
use strum::IntoEnumIterator;

/// Filtering thresholds and window sizes consumed at model construction.
///
/// `min_word_length` and `min_frequency` are independent blacklist criteria:
/// a token shorter than `min_word_length` chars is excluded from the model
/// even when frequent, and a token seen fewer than `min_frequency` times is
/// excluded even when long. Either alone is sufficient.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub min_word_length: usize,
    pub min_frequency: usize,
    pub(super) ngram_sizes: NgramSizes,
}

impl Default for ModelConfig {
    /// No filtering, all window sizes enabled.
    #[inline]
    fn default() -> Self {
        Self {
            min_word_length: 1,
            min_frequency: 1,
            ngram_sizes: NgramSizes::new_merged(NgramSize::iter()),
        }
    }
}

impl ModelConfig {
    #[inline]
    pub fn new(min_word_length: usize, min_frequency: usize) -> Self {
        Self {
            min_word_length,
            min_frequency,
            ..Default::default()
        }
    }

    #[inline]
    pub fn min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    #[inline]
    pub fn min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Restrict which window sizes are inserted into the trie.
    /// Falls back to all sizes when given an empty selection.
    #[inline]
    pub fn ngram_sizes(mut self, ngram_sizes: impl Iterator<Item = NgramSize>) -> Self {
        self.ngram_sizes = NgramSizes::new_merged(ngram_sizes);
        if self.ngram_sizes.is_empty() {
            self.ngram_sizes = NgramSizes::new_merged(NgramSize::iter());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ModelConfig;
    use crate::ngram_size::NgramSize;

    #[test]
    fn test_default_enables_all_sizes() {
        let config = ModelConfig::default();
        assert_eq!(config.min_word_length, 1);
        assert_eq!(config.min_frequency, 1);
        assert_eq!(
            config.ngram_sizes.as_slice(),
            &[NgramSize::Uni, NgramSize::Bi, NgramSize::Tri]
        );
    }

    #[test]
    fn test_empty_ngram_sizes_fall_back() {
        let config = ModelConfig::new(2, 3).ngram_sizes([].into_iter());
        assert_eq!(config.ngram_sizes.len(), 3);
        assert_eq!(config.min_word_length, 2);
        assert_eq!(config.min_frequency, 3);
    }

    #[test]
    fn test_ngram_sizes_selection() {
        let config = ModelConfig::default().ngram_sizes([NgramSize::Bi].into_iter());
        assert_eq!(config.ngram_sizes.as_slice(), &[NgramSize::Bi]);
    }
}
