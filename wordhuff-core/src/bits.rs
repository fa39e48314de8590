//! Bit sequences for prefix codes.
//!
//! A [`BitSequence`] is an ordered, growable sequence of [`Bit`]s. Bits are
//! packed MSB-first into bytes: the first bit pushed occupies the most
//! significant bit of byte 0. The final byte is zero-padded; the explicit
//! bit length tells where the sequence really ends.
//!
//! # Text form
//!
//! `Display` renders a sequence as a string of `'0'` ([`Bit::Left`]) and
//! `'1'` ([`Bit::Right`]); `FromStr` parses the same form.
//!
//! ```
//! use wordhuff_core::bits::{Bit, BitSequence};
//!
//! let mut bits = BitSequence::new();
//! bits.push(Bit::Right);
//! bits.push(Bit::Left);
//! bits.push(Bit::Right);
//! assert_eq!(bits.to_string(), "101");
//!
//! let parsed: BitSequence = "101".parse().unwrap();
//! assert_eq!(parsed, bits);
//! ```

use crate::error::{Result, WordHuffError};
use std::fmt;
use std::str::FromStr;

/// One binary symbol of a code: which child to descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// Descend to the left child (`0`).
    Left,
    /// Descend to the right child (`1`).
    Right,
}

impl Bit {
    /// Character used in the text form.
    pub fn as_char(self) -> char {
        match self {
            Bit::Left => '0',
            Bit::Right => '1',
        }
    }

    /// Parse a single text-form character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Left),
            '1' => Some(Bit::Right),
            _ => None,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::Right } else { Bit::Left }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::Right
    }
}

/// A packed, ordered sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    /// Packed bits, MSB-first. Unused trailing bits are always zero.
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Build a sequence from packed bytes and a bit length.
    ///
    /// Fails if `len` needs more bits than `bytes` holds. Padding bits past
    /// `len` are cleared.
    pub fn from_bytes(mut bytes: Vec<u8>, len: usize) -> Result<Self> {
        let needed = len.div_ceil(8);
        if needed > bytes.len() {
            return Err(WordHuffError::invalid_input(format!(
                "bit length {} needs {} bytes, got {}",
                len,
                needed,
                bytes.len()
            )));
        }
        bytes.truncate(needed);
        let tail = len % 8;
        if tail != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFFu8 << (8 - tail);
            }
        }
        Ok(Self { bytes, len })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes, MSB-first, zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append one bit.
    #[inline]
    pub fn push(&mut self, bit: Bit) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit == Bit::Right {
            self.bytes[byte_index] |= 0x80 >> bit_offset;
        }
        self.len += 1;
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<Bit> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte_index = self.len / 8;
        let mask = 0x80u8 >> (self.len % 8);
        let bit = Bit::from(self.bytes[byte_index] & mask != 0);
        self.bytes[byte_index] &= !mask;
        if self.len % 8 == 0 {
            self.bytes.pop();
        }
        Some(bit)
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitSequence) {
        if self.len % 8 == 0 {
            // Byte-aligned: copy whole bytes.
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        self.bytes.reserve(other.bytes.len());
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Bit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Bit> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some(Bit::from(byte & (0x80 >> (index % 8)) != 0))
    }

    /// Whether `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        self.len <= other.len && (0..self.len).all(|i| self.get(i) == other.get(i))
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bits: self,
            position: 0,
        }
    }
}

/// Iterator over the bits of a [`BitSequence`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    bits: &'a BitSequence,
    position: usize,
}

impl Iterator for Iter<'_> {
    type Item = Bit;

    #[inline]
    fn next(&mut self) -> Option<Bit> {
        let bit = self.bits.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = Bit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Bit> for BitSequence {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bits = BitSequence::with_capacity(iter.size_hint().0);
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl Extend<Bit> for BitSequence {
    fn extend<I: IntoIterator<Item = Bit>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.iter().map(Bit::as_char).collect();
        f.pad(&text)
    }
}

impl FromStr for BitSequence {
    type Err = WordHuffError;

    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitSequence::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            let bit = Bit::from_char(c).ok_or_else(|| WordHuffError::invalid_bit(position, c))?;
            bits.push(bit);
        }
        Ok(bits)
    }
}
