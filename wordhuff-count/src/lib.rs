//! # WordHuff-Count: Parallel Word Frequency Counting
//!
//! Builds the [`FrequencyTable`](wordhuff_core::FrequencyTable) a Huffman
//! codec is constructed from.
//!
//! ## How it works
//!
//! - The input is split into `partitions` contiguous, near-equal ranges;
//!   the last range absorbs the remainder.
//! - Each range is counted by one task on a fixed-size rayon pool into a
//!   private table. There is no shared mutable state while counting.
//! - After every task has finished, partial tables are summed on the
//!   calling thread. Addition commutes, so the result never depends on the
//!   partition count or on scheduling.
//!
//! ## Example
//!
//! ```rust
//! use wordhuff_count::{CountConfig, FrequencyCounter};
//!
//! let words = ["a", "b", "a", "c", "b", "a"];
//! let counter = FrequencyCounter::new(CountConfig::new(2)).unwrap();
//! let table = counter.count(&words).unwrap();
//!
//! assert_eq!(table.get("a"), Some(3));
//! assert_eq!(table.get("b"), Some(2));
//! assert_eq!(table.get("c"), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod counter;
mod partition;

pub use config::CountConfig;
pub use counter::{FrequencyCounter, count_words};
pub use partition::partition_ranges;
