//! Error types for word construction and engine operations

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters, got '{0}'")]
    InvalidCharacters(String),
}

/// Errors surfaced by the comparator, filter, scorers and simulation loop
///
/// Running out of candidates is not an error: it is reported as
/// [`Outcome::Exhausted`](crate::solver::Outcome::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Two inputs of one operation disagree on word length
    #[error("Invalid input: '{word}' has length {found}, expected {expected}")]
    InvalidInput {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
}

impl EngineError {
    pub(crate) fn length_mismatch(word: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::InvalidInput {
            word: word.into(),
            expected,
            found,
        }
    }
}
