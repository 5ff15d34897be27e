//! Error types for the solver core
//!
//! Every failure the core can report is a [`SolverError`]. Only the
//! interactive-input variants are recoverable; everything else means the
//! caller broke a contract or the feedback it supplied is inconsistent.

use crate::core::WordError;
use thiserror::Error;

/// Errors produced by the solver core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("word '{word}' has length {actual}, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("cannot rank an empty candidate pool")]
    EmptyPool,

    #[error("lookahead depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error(
        "no candidate is consistent with guess '{guess}' and feedback {feedback}; \
         the target is not representable in this vocabulary"
    )]
    TargetNotRepresentable { guess: String, feedback: String },

    #[error("malformed feedback '{input}': {reason}")]
    MalformedFeedback { input: String, reason: String },

    #[error("pair ({guess}, {target}) is outside the precomputed vocabulary")]
    CacheMiss { guess: String, target: String },

    #[error("guess '{0}' is not in the vocabulary and cannot be scored by the feedback cache")]
    GuessNotInVocabulary(String),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

impl SolverError {
    /// True for errors caused by interactive input that can simply be re-entered
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedFeedback { .. } | Self::GuessNotInVocabulary(_)
        )
    }
}

/// Result alias used throughout the core
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
