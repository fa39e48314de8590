//! # WordHuff Core
//!
//! Core components shared by the WordHuff crates:
//!
//! - [`bits`]: packed bit sequences used as prefix codes and encoded output
//! - [`frequency`]: word frequency tables
//! - [`text`]: uncompressed length of a word sequence
//! - [`traits`]: word compressor/decompressor traits
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ wordhuff-codec                                          │
//! │     code tree, code table, HuffmanCodec                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ wordhuff-count                                          │
//! │     partitioned parallel word counting                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ wordhuff-core (this crate)                              │
//! │     BitSequence, FrequencyTable, traits, errors         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordhuff_core::{BitSequence, FrequencyTable};
//!
//! let mut table = FrequencyTable::new();
//! for word in "the cat and the hat".split_whitespace() {
//!     table.increment(word).unwrap();
//! }
//! assert_eq!(table.get("the"), Some(2));
//!
//! let bits: BitSequence = "0110".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod error;
pub mod frequency;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use bits::{Bit, BitSequence};
pub use error::{Result, WordHuffError};
pub use frequency::FrequencyTable;
pub use text::text_length;
pub use traits::{WordCompressor, WordDecompressor};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bits::{Bit, BitSequence};
    pub use crate::error::{Result, WordHuffError};
    pub use crate::frequency::FrequencyTable;
    pub use crate::text::text_length;
    pub use crate::traits::{WordCompressor, WordDecompressor};
}
