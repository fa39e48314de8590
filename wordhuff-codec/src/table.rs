//! Code table derived from a code tree.

use crate::node::Node;
use log::trace;
use std::collections::BTreeMap;
use wordhuff_core::{Bit, BitSequence, FrequencyTable, Result, WordHuffError};

/// Mapping from word to its prefix code.
///
/// Every code is the root-to-leaf path of one leaf, so no code is a prefix
/// of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<String, BitSequence>,
}

impl CodeTable {
    /// Derive the table by a depth-first walk of `root`.
    ///
    /// A leaf root gets the empty code; codec construction never produces one.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = BitSequence::new();
        collect_codes(root, &mut path, &mut codes);
        Self { codes }
    }

    /// Code for `word`.
    #[inline]
    pub fn get(&self, word: &str) -> Option<&BitSequence> {
        self.codes.get(word)
    }

    /// Whether `word` has a code.
    pub fn contains(&self, word: &str) -> bool {
        self.codes.contains_key(word)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(word, code)` pairs in lexicographic word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BitSequence)> {
        self.codes.iter().map(|(word, code)| (word.as_str(), code))
    }

    /// Longest code length in bits.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitSequence::len).max().unwrap_or(0)
    }

    /// Shortest code length in bits.
    pub fn min_code_len(&self) -> usize {
        self.codes.values().map(BitSequence::len).min().unwrap_or(0)
    }

    /// Total encoded size, in bits, of a corpus with the given counts.
    ///
    /// Fails with [`WordHuffError::UnknownSymbol`] if `frequencies` names a
    /// word without a code.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> Result<u64> {
        frequencies.iter().try_fold(0u64, |acc, (word, count)| {
            let code = self
                .codes
                .get(word)
                .ok_or_else(|| WordHuffError::unknown_symbol(word))?;
            count
                .checked_mul(code.len() as u64)
                .and_then(|bits| acc.checked_add(bits))
                .ok_or_else(|| WordHuffError::count_overflow(word))
        })
    }
}

fn collect_codes(node: &Node, path: &mut BitSequence, codes: &mut BTreeMap<String, BitSequence>) {
    match node {
        Node::Leaf { word, .. } => {
            trace!("code {word:?} = {path}");
            codes.insert(word.clone(), path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(Bit::Left);
            collect_codes(left, path, codes);
            path.pop();
            path.push(Bit::Right);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}
