//! Kope Scan Library
//!
//! This library contains the core components of the Kope Scan plagiarism
//! detection engine: the Aho-Corasick pattern automaton, the similarity
//! scanner built on top of it, and the checking service that ties corpus
//! retrieval and alerting together. The library is designed to be used by
//! the binary crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The Kope Scan engine is designed with the following principles in mind:
//! - Strict component boundaries
//! - Dependency injection for testability
//! - Async orchestration around a synchronous, CPU-bound scanning core
//! - Comprehensive error handling and propagation
//! - Single-pass scanning regardless of corpus size

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod detection;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Kope Scan engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::KopeResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
