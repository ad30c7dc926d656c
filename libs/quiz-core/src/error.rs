//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Invariant violations inside a card set or quiz session.
///
/// None of these should be reachable through the public session API. The
/// session still maps each one to a deterministic outcome and records it
/// (see [`crate::session::QuizSession::last_fault`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("card index {index} out of range for {len} cards")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid mastery weight {value}")]
    InvalidWeight { value: i32 },

    #[error("weight sum is zero but only {mastered} of {total} cards are mastered")]
    WeightSumMismatch { mastered: usize, total: usize },

    #[error("card {index} has an empty answer")]
    EmptyAnswer { index: usize },

    #[error("card {index} has an empty question")]
    EmptyQuestion { index: usize },

    #[error("cannot start a quiz without cards")]
    EmptyCardSet,
}

/// Errors raised while reading a deck from a resource source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("resource not found: {name}")]
    NotFound { name: String },

    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("resource {name} is not valid UTF-8")]
    InvalidUtf8 { name: String },
}
