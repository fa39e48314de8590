//! Code tree nodes.

use wordhuff_core::{Bit, Result, WordHuffError};

/// A node of the Huffman code tree.
///
/// Children are owned exclusively by their parent. An internal node's weight
/// is always the sum of its children's weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A word and its count.
    Leaf {
        /// Occurrence count of `word`.
        weight: u64,
        /// The word this leaf decodes to.
        word: String,
    },
    /// Two subtrees and their combined weight.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached by [`Bit::Left`].
        left: Box<Node>,
        /// Subtree reached by [`Bit::Right`].
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(word: impl Into<String>, weight: u64) -> Self {
        Node::Leaf {
            weight,
            word: word.into(),
        }
    }

    /// Join two subtrees under a new internal node.
    ///
    /// Fails with [`WordHuffError::CountOverflow`] if the combined weight
    /// does not fit in a `u64`.
    pub fn internal(left: Node, right: Node) -> Result<Self> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or_else(|| WordHuffError::count_overflow("<tree weight>"))?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child selected by `bit`, or `None` for a leaf.
    #[inline]
    pub fn child(&self, bit: Bit) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(match bit {
                Bit::Left => left,
                Bit::Right => right,
            }),
        }
    }

    /// Length of the longest root-to-leaf path (0 for a leaf).
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}
