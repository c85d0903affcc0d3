use arrayvec::ArrayVec;
use strum::EnumCount;
use strum_macros::{EnumCount, EnumIter};

pub(crate) const NGRAM_MAX_LEN: usize = 3;

/// Window sizes the model learns conditional probabilities for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCount, EnumIter)]
#[repr(usize)]
pub enum NgramSize {
    Uni = 0,
    Bi = 1,
    Tri = 2,
}

impl NgramSize {
    /// Number of tokens in a window of this size.
    #[inline(always)]
    pub fn len(self) -> usize {
        self as usize + 1
    }
}

pub type NgramSizes = ArrayVec<NgramSize, { NgramSize::COUNT }>;

pub trait NgramSizesTrait: Sized {
    fn merge(&mut self, ngram_sizes: impl Iterator<Item = NgramSize>);
    fn new_merged(ngram_sizes: impl Iterator<Item = NgramSize>) -> Self;
}

impl NgramSizesTrait for NgramSizes {
    fn merge(&mut self, ngram_sizes: impl Iterator<Item = NgramSize>) {
        for ngram_size in ngram_sizes {
            if !self.contains(&ngram_size) {
                self.push(ngram_size);
            }
        }
        self.sort_unstable();
    }

    #[inline]
    fn new_merged(ngram_sizes: impl Iterator<Item = NgramSize>) -> Self {
        let mut new = Self::new_const();
        new.merge(ngram_sizes);
        new
    }
}
