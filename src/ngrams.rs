use crate::ngram_size::NGRAM_MAX_LEN;

/// Contiguous windows of `size` elements, one per qualifying center index.
///
/// For each index `i` the window `seq[i - offset .. i - offset + size]` with
/// `offset = size / 2` is produced only when it fits entirely within bounds
/// (`i >= offset` and `i + size - offset <= seq.len()`). A sequence of `n`
/// elements therefore yields `n` windows of size 1, `n - 1` of size 2 and
/// `n - 2` of size 3, in sequence order.
///
/// The iterator is lazy and borrows `seq`; a fresh call is needed per pass.
pub fn windows<T>(seq: &[T], size: usize) -> impl Iterator<Item = &[T]> {
    debug_assert!(
        (1..=NGRAM_MAX_LEN).contains(&size),
        "window size {size} is not in range 1..={NGRAM_MAX_LEN}"
    );

    let offset = size / 2;
    (0..seq.len())
        .filter(move |&i| i >= offset && i + size - offset <= seq.len())
        .map(move |i| &seq[i - offset..i - offset + size])
}
