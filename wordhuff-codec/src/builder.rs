//! Huffman tree construction.
//!
//! Leaves are created in lexicographic word order and pushed onto a min-heap
//! keyed by `(weight, sequence)`, where `sequence` counts insertions. Equal
//! weights therefore dequeue in insertion order, which makes the tree shape
//! a pure function of the frequency table. The first node popped in each
//! round becomes the left child, the second the right child.

use crate::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use wordhuff_core::{FrequencyTable, Result, WordHuffError};

/// Heap entry ordered so that `BinaryHeap` pops the lowest `(weight, sequence)`.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    sequence: u64,
    node: Node,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        (other.weight, other.sequence).cmp(&(self.weight, self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Min-priority queue that is stable for equal weights.
#[derive(Debug, Default)]
struct StableQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl StableQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    fn push(&mut self, node: Node) {
        let entry = QueueEntry {
            weight: node.weight(),
            sequence: self.next_sequence,
            node,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Build the code tree for `frequencies`.
///
/// Requires at least two distinct words; the returned root is always an
/// internal node.
pub fn build_tree(frequencies: &FrequencyTable) -> Result<Node> {
    if frequencies.len() < 2 {
        return Err(WordHuffError::invalid_input(format!(
            "at least two distinct words are required, got {}",
            frequencies.len()
        )));
    }

    let mut queue = StableQueue::with_capacity(frequencies.len());
    for (word, count) in frequencies.sorted() {
        queue.push(Node::leaf(word, count));
    }

    loop {
        let left = queue
            .pop()
            .ok_or_else(|| WordHuffError::invalid_input("empty frequency table"))?;
        let Some(right) = queue.pop() else {
            return Ok(left);
        };
        trace!(
            "merge {} + {} ({} nodes left)",
            left.weight(),
            right.weight(),
            queue.len()
        );
        queue.push(Node::internal(left, right)?);
    }
}
