// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Aho-Corasick pattern automaton.

use thiserror::Error;

/// Errors that can occur during automaton construction and searching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// Attempted to add an empty pattern
    #[error("Pattern cannot be empty")]
    EmptyPattern,

    /// Attempted to search before failure links were computed
    #[error("Automaton has not been built; call build() before searching")]
    NotBuilt,

    /// Attempted to add a pattern or rebuild after failure links were computed
    #[error("Automaton has already been built and is immutable")]
    AlreadyBuilt,

    /// The scan was cancelled through its cancellation token
    #[error("Scan was cancelled before completion")]
    Cancelled,
}

/// A specialized `Result` type for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
