//! Custom error types for wordquiz
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Store and validation failures are recoverable by design: the interactive
//! flows report the message and continue (or re-prompt), they never abort the
//! program. The only fatal condition is losing the console itself.

use thiserror::Error;

/// The main error type for wordquiz operations
#[derive(Error, Debug)]
pub enum WordQuizError {
    /// Console I/O errors (stdin/stdout unavailable or broken)
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user-supplied fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// The word store is at its capacity ceiling
    #[error("Word store is full: capacity of {capacity} words reached")]
    CapacityExceeded {
        /// The fixed store capacity
        capacity: usize,
    },

    /// No entry exists for the given English term
    #[error("Word not found: '{word}' (enter the English term)")]
    NotFound {
        /// The term that was looked up
        word: String,
    },

    /// An entry with the same English term already exists
    #[error("Word already registered: '{word}'")]
    Duplicate {
        /// The conflicting term
        word: String,
    },

    /// The supplied meaning does not match the stored meaning
    #[error("Meaning '{expected}' does not match the stored meaning of '{word}'")]
    MeaningMismatch {
        /// The English term being checked
        word: String,
        /// The meaning the caller expected
        expected: String,
    },

    /// A meaning was supplied where an English term was expected
    #[error("'{word}' looks like a meaning, not an English term")]
    EnglishExpected {
        /// The offending argument
        word: String,
    },
}

/// Result type alias for wordquiz operations
pub type WordQuizResult<T> = Result<T, WordQuizError>;

impl From<std::io::Error> for WordQuizError {
    fn from(err: std::io::Error) -> Self {
        WordQuizError::Io(err.to_string())
    }
}
