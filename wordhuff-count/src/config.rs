//! Counting configuration.

use wordhuff_core::{Result, WordHuffError};

/// Parameters of a parallel counting run.
///
/// The partition count never changes the result, only how the work is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountConfig {
    /// Number of contiguous ranges the input is split into.
    pub partitions: usize,
    /// Number of worker threads in the pool.
    pub threads: usize,
}

impl CountConfig {
    /// Ten partitions on ten workers.
    pub const DEFAULT: Self = Self {
        partitions: 10,
        threads: 10,
    };

    /// One partition counted on a single worker.
    pub const SINGLE: Self = Self {
        partitions: 1,
        threads: 1,
    };

    /// One worker per partition.
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions,
            threads: partitions,
        }
    }

    /// Override the worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Reject zero partitions or zero threads.
    pub fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(WordHuffError::invalid_input("partition count must be at least 1"));
        }
        if self.threads == 0 {
            return Err(WordHuffError::invalid_input("thread count must be at least 1"));
        }
        Ok(())
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
