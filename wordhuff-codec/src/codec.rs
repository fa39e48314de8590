//! The word-level Huffman codec.

use crate::builder::build_tree;
use crate::node::Node;
use crate::table::CodeTable;
use log::debug;
use wordhuff_core::{
    BitSequence, FrequencyTable, Result, WordCompressor, WordDecompressor, WordHuffError,
};

/// Static Huffman codec over a fixed vocabulary.
///
/// Built once from a frequency table; the tree and code table are read-only
/// for the codec's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCodec {
    root: Node,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Build a codec from word counts.
    ///
    /// Fails with [`WordHuffError::InvalidInput`] unless `frequencies` holds
    /// at least two distinct words.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let root = build_tree(frequencies)?;
        let table = CodeTable::from_tree(&root);

        debug!(
            "built codec: {} words, tree depth {}, code lengths {}..={}",
            table.len(),
            root.depth(),
            table.min_code_len(),
            table.max_code_len()
        );
        Ok(Self { root, table })
    }

    /// Root of the code tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Derived code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// Code for `word`, if it is in the vocabulary.
    pub fn code(&self, word: &str) -> Option<&BitSequence> {
        self.table.get(word)
    }

    /// Whether `word` is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    /// Number of words in the vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.table.len()
    }

    /// Encode `words` into one bit sequence.
    ///
    /// Fails with [`WordHuffError::EmptyInput`] for an empty slice and with
    /// [`WordHuffError::UnknownSymbol`] for a word outside the vocabulary.
    pub fn compress<S: AsRef<str>>(&self, words: &[S]) -> Result<BitSequence> {
        if words.is_empty() {
            return Err(WordHuffError::empty_input("compress"));
        }

        let mut output = BitSequence::with_capacity(words.len() * self.table.min_code_len());
        for word in words {
            let word = word.as_ref();
            let code = self
                .table
                .get(word)
                .ok_or_else(|| WordHuffError::unknown_symbol(word))?;
            output.extend_from(code);
        }
        Ok(output)
    }

    /// Decode `bits` back into words.
    ///
    /// Fails with [`WordHuffError::EmptyInput`] for an empty sequence and
    /// with [`WordHuffError::TruncatedInput`] if the bits run out before a
    /// leaf is reached.
    pub fn decompress(&self, bits: &BitSequence) -> Result<Vec<String>> {
        if bits.is_empty() {
            return Err(WordHuffError::empty_input("decompress"));
        }

        let mut words = Vec::new();
        let mut node = &self.root;
        let mut in_code = false;

        for bit in bits {
            node = node
                .child(bit)
                .ok_or_else(|| WordHuffError::invalid_input("code tree root is a leaf"))?;
            in_code = true;

            if let Node::Leaf { word, .. } = node {
                words.push(word.clone());
                node = &self.root;
                in_code = false;
            }
        }

        if in_code {
            return Err(WordHuffError::truncated(bits.len()));
        }
        Ok(words)
    }
}

impl WordCompressor for HuffmanCodec {
    fn compress<S: AsRef<str>>(&self, words: &[S]) -> Result<BitSequence> {
        HuffmanCodec::compress(self, words)
    }
}

impl WordDecompressor for HuffmanCodec {
    fn decompress(&self, bits: &BitSequence) -> Result<Vec<String>> {
        HuffmanCodec::decompress(self, bits)
    }
}
