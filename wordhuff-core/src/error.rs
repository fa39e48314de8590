//! Error types for WordHuff operations.
//!
//! A single error enum covers input-contract violations raised by the codec,
//! failures of the parallel frequency counter, and bit-string parsing errors.
//! None of these are transient; callers should not retry.

use thiserror::Error;

/// The main error type for WordHuff operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordHuffError {
    /// Input does not satisfy the operation's contract (e.g. fewer than two
    /// distinct words for codec construction).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the violated requirement.
        message: String,
    },

    /// An empty sequence was passed where at least one element is required.
    #[error("Empty input passed to {operation}")]
    EmptyInput {
        /// Name of the operation that rejected the input.
        operation: &'static str,
    },

    /// Word not present in the codec's vocabulary.
    #[error("Unknown symbol: {word:?} is not in the vocabulary")]
    UnknownSymbol {
        /// The out-of-vocabulary word.
        word: String,
    },

    /// Bit sequence ended inside a code (not on a leaf boundary).
    #[error("Truncated input: bit sequence ended mid-code at bit position {bit_position}")]
    TruncatedInput {
        /// Number of bits consumed when the input ran out.
        bit_position: usize,
    },

    /// Bit string contains a character other than `0` or `1`.
    #[error("Invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// Character index of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// A count or tree weight exceeded `u64::MAX`.
    #[error("Count overflow while accumulating {word:?}")]
    CountOverflow {
        /// Word (or node description) whose count overflowed.
        word: String,
    },

    /// A counting worker failed.
    #[error("Worker for partition {partition} failed: {message}")]
    Worker {
        /// Index of the failing partition.
        partition: usize,
        /// Panic payload or failure description.
        message: String,
    },

    /// The worker thread pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for WordHuff operations.
pub type Result<T> = std::result::Result<T, WordHuffError>;

impl WordHuffError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an empty input error.
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(word: impl Into<String>) -> Self {
        Self::UnknownSymbol { word: word.into() }
    }

    /// Create a truncated input error.
    pub fn truncated(bit_position: usize) -> Self {
        Self::TruncatedInput { bit_position }
    }

    /// Create an invalid bit error.
    pub fn invalid_bit(position: usize, found: char) -> Self {
        Self::InvalidBit { position, found }
    }

    /// Create a count overflow error.
    pub fn count_overflow(word: impl Into<String>) -> Self {
        Self::CountOverflow { word: word.into() }
    }

    /// Create a worker failure error.
    pub fn worker(partition: usize, message: impl Into<String>) -> Self {
        Self::Worker {
            partition,
            message: message.into(),
        }
    }

    /// Create a thread pool error.
    pub fn thread_pool(message: impl Into<String>) -> Self {
        Self::ThreadPool(message.into())
    }
}
