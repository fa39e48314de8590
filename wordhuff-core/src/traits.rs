//! Core traits for word-level codecs.
//!
//! A word codec maps whole words to bit sequences and back. Unlike the
//! byte-stream codecs these traits are modelled on, input is always a
//! complete in-memory sequence; there is no streaming state to reset.

use crate::bits::BitSequence;
use crate::error::Result;

/// Encodes word sequences into bit sequences.
pub trait WordCompressor {
    /// Encode `words` in order into one bit sequence.
    fn compress<S: AsRef<str>>(&self, words: &[S]) -> Result<BitSequence>;

    /// Encode whitespace-delimited `text` (convenience method).
    fn compress_text(&self, text: &str) -> Result<BitSequence> {
        let words: Vec<&str> = text.split_ascii_whitespace().collect();
        self.compress(&words)
    }
}

/// Decodes bit sequences back into word sequences.
pub trait WordDecompressor {
    /// Decode `bits` into the word sequence it encodes.
    fn decompress(&self, bits: &BitSequence) -> Result<Vec<String>>;

    /// Decode `bits` and join the words with single spaces.
    fn decompress_to_string(&self, bits: &BitSequence) -> Result<String> {
        Ok(self.decompress(bits)?.join(" "))
    }
}
