//! Test modules for the Kope Scan engine.
//!
//! This module contains crate-wide testing infrastructure, including:
//! - Tests for configuration loading and validation
//! - Tests for the error handling framework
//! - Property-based tests for the similarity scanner
//! - Test fixtures and utilities
//!
//! The test philosophy follows the project standards:
//! - Testing all error paths and edge cases
//! - Property-based testing for scanning and scoring invariants
//! - Component tests live next to their components; cross-cutting tests
//!   live here

pub mod scanner_property_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{candidate_strategy, corpus_strategy, create_test_dir, TestFixture};
