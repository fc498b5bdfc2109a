//! # Error Types

/// Errors from wordmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmergeError {
    /// The target vocab size cannot hold the unknown token plus one symbol.
    #[error("vocab size ({vocab_size}) must be >= 2")]
    InvalidArgument {
        /// The vocab size that was too small.
        vocab_size: usize,
    },

    /// The training corpus contained no words.
    #[error("corpus is empty and cannot be used for training")]
    EmptyInput,

    /// Encode or decode was called before training.
    #[error("tokenizer has not been trained")]
    NotTrained,

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Model (de)serialization error.
    #[cfg(feature = "io")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for wordmerge operations.
pub type WMResult<T> = core::result::Result<T, WordmergeError>;
