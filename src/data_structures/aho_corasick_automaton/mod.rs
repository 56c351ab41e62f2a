// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Aho-Corasick automaton for simultaneous multi-pattern searching.
//!
//! This module provides the matching core of the similarity scanner: a
//! character-keyed trie augmented with failure links, built once from a set
//! of patterns and then able to report every occurrence of every pattern in
//! a single left-to-right pass over a text, overlapping occurrences
//! included.
//!
//! # Features
//!
//! - Linear-time scanning independent of the number of patterns
//! - Overlapping and nested matches all reported, none suppressed
//! - Duplicate pattern insertion is idempotent
//! - Lazy match stream; no match is computed before it is demanded
//! - Cooperative cancellation for scans over large texts
//! - Works in character positions, so multi-byte UTF-8 text is handled
//!   uniformly
//!
//! # Example
//!
//! ```
//! use kope_scan_lib::data_structures::aho_corasick_automaton::PatternAutomaton;
//!
//! let mut automaton = PatternAutomaton::new();
//! automaton.add_pattern("he").unwrap();
//! automaton.add_pattern("she").unwrap();
//! automaton.add_pattern("his").unwrap();
//! automaton.add_pattern("hers").unwrap();
//! automaton.build().unwrap();
//!
//! let events = automaton
//!     .search("ahishers")
//!     .unwrap()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! // "his", "she", "he" and "hers" all occur, two of them overlapping.
//! assert_eq!(events.len(), 4);
//! ```
//!
//! # Performance Characteristics
//!
//! - Construction: O(total pattern characters) trie insertion plus one
//!   breadth-first pass for failure links
//! - Scanning: O(text characters + reported matches); each character
//!   advances the state machine at most depth-of-state times in the worst
//!   case and amortized once
//! - Space: one state per distinct pattern prefix

mod automaton;
mod cancel;
mod error;
mod node;

// Re-exports
pub use automaton::{MatchEvent, MatchStream, PatternAutomaton, PatternId};
pub use cancel::ScanCancellation;
pub use error::{AutomatonError, Result};

#[cfg(test)]
mod tests;
