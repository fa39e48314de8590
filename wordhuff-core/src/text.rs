//! Measurements over plain word sequences.

/// Length in bytes of `words` written out with one separator between
/// neighbours.
///
/// This is the uncompressed size to set against a compressed bit count.
/// An empty sequence has length 0. The sum saturates at `u64::MAX`.
///
/// # Example
///
/// ```
/// use wordhuff_core::text_length;
///
/// assert_eq!(text_length(&["the", "cat"]), 7);
/// ```
pub fn text_length<S: AsRef<str>>(words: &[S]) -> u64 {
    let separators = words.len().saturating_sub(1) as u64;
    words
        .iter()
        .map(|word| word.as_ref().len() as u64)
        .fold(separators, u64::saturating_add)
}
