//! # WordHuff-Codec: Word-Level Huffman Coding
//!
//! A static Huffman codec whose symbols are whole words rather than bytes.
//!
//! ## Construction
//!
//! - Leaves are created in lexicographic word order.
//! - The two lightest nodes are merged repeatedly; the first one dequeued
//!   becomes the left child (`0`), the second the right child (`1`).
//! - Equal weights dequeue in insertion order, so the same frequency table
//!   always yields the same code table.
//!
//! ## Example
//!
//! ```rust
//! use wordhuff_codec::HuffmanCodec;
//! use wordhuff_core::FrequencyTable;
//!
//! let freqs: FrequencyTable = [("the", 5), ("cat", 2), ("sat", 1)].into_iter().collect();
//! let codec = HuffmanCodec::build(&freqs).unwrap();
//!
//! let bits = codec.compress(&["the", "cat", "the"]).unwrap();
//! assert_eq!(bits.to_string(), "1011");
//!
//! let words = codec.decompress(&bits).unwrap();
//! assert_eq!(words, ["the", "cat", "the"]);
//! ```
//!
//! Words outside the vocabulary cannot be encoded:
//!
//! ```rust
//! use wordhuff_codec::HuffmanCodec;
//! use wordhuff_core::{FrequencyTable, WordHuffError};
//!
//! let freqs: FrequencyTable = [("a", 1), ("b", 1)].into_iter().collect();
//! let codec = HuffmanCodec::build(&freqs).unwrap();
//!
//! assert!(matches!(
//!     codec.compress(&["z"]),
//!     Err(WordHuffError::UnknownSymbol { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod builder;
mod codec;
mod node;
mod table;

pub use builder::build_tree;
pub use codec::HuffmanCodec;
pub use node::Node;
pub use table::CodeTable;
