//! Error types for the Vidminok system.
//!
//! Uses `thiserror` for ergonomic error definition. Classification is the
//! only fallible operation: once a word is placed in a declension group,
//! every (case, number) combination is covered by the ending tables.

use thiserror::Error;

/// A specialized `Result` type for declension operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for declension operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The word could not be placed into any declension group.
    ///
    /// Guessing a group would silently produce wrong grammar, so this
    /// propagates to the caller instead.
    #[error("could not determine declension group for word '{word}'")]
    UnsupportedWord {
        /// The word that failed to classify.
        word: String,
    },
}

impl Error {
    /// Creates an unsupported-word error.
    #[must_use]
    pub fn unsupported_word(word: impl Into<String>) -> Self {
        Self::UnsupportedWord { word: word.into() }
    }
}
