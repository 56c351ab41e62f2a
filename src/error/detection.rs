//! Detection error module.
//!
//! This module defines error types raised while a submission is being
//! checked for plagiarism, from input validation through corpus retrieval
//! to the scan itself.

use thiserror::Error;

use crate::data_structures::aho_corasick_automaton::AutomatonError;

/// Errors that can occur during a plagiarism check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// Error when the candidate text is empty.
    #[error("Candidate text cannot be empty")]
    EmptyInput,

    /// Error when the candidate text exceeds the configured size bound.
    #[error("Candidate text has {chars} characters, exceeding the maximum of {max}")]
    CandidateTooLarge {
        /// Character count of the rejected candidate
        chars: usize,
        /// Configured maximum
        max: usize,
    },

    /// Error when prior submissions cannot be retrieved.
    #[error("Comparison corpus unavailable: {0}")]
    CorpusUnavailable(String),

    /// Error when the check was cancelled before completion.
    #[error("Plagiarism check was cancelled before completion")]
    Cancelled,

    /// Error raised by the underlying pattern automaton.
    #[error("Pattern automaton error: {0}")]
    Automaton(#[from] AutomatonError),

    /// Error when a scan task fails for reasons outside the detection domain.
    #[error("Internal detection failure: {0}")]
    Internal(String),
}

/// A specialized `Result` type for detection operations.
pub type DetectionResult<T> = Result<T, DetectionError>;
