//! Data structures for the Kope Scan engine.
//!
//! This module contains the specialized data structures backing similarity
//! detection. Implementations adhere to the strict project requirements:
//! - No unsafe code
//! - Index-based arenas instead of reference-counted graphs
//! - Single-pass scanning over candidate texts

pub mod aho_corasick_automaton;

// Re-export common data structures
pub use aho_corasick_automaton::{
    AutomatonError, MatchEvent, MatchStream, PatternAutomaton, PatternId, ScanCancellation,
};
