// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Corpus retrieval seam for the plagiarism checker.
//!
//! The checker never talks to storage directly; it asks a [`SubmissionStore`]
//! for the prior texts selected by a [`CorpusScope`]. Production code plugs
//! in a real store, tests plug in mocks or in-memory fixtures.

use async_trait::async_trait;

use crate::config::detection::CorpusScopeStrategy;
use crate::error::detection::DetectionResult;

/// Which prior submissions a single check compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusScope {
    /// Prior submissions for one assignment
    Assignment(String),
    /// Every stored submission
    SystemWide,
}

impl CorpusScope {
    /// Resolves the configured strategy into a concrete scope for a request.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The configured corpus selection strategy
    /// * `assignment_id` - Assignment the checked submission belongs to
    pub fn for_request(strategy: CorpusScopeStrategy, assignment_id: &str) -> Self {
        match strategy {
            CorpusScopeStrategy::PerAssignment => Self::Assignment(assignment_id.to_string()),
            CorpusScopeStrategy::SystemWide => Self::SystemWide,
        }
    }
}

/// Source of prior submission texts.
///
/// Implementations should return the texts in a stable order, although scan
/// results do not depend on it. Failures must surface as
/// [`DetectionError::CorpusUnavailable`](crate::error::detection::DetectionError::CorpusUnavailable)
/// so callers can distinguish retrieval problems from scan problems.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Fetches the texts of all prior submissions within `scope`.
    async fn fetch_prior_texts(&self, scope: &CorpusScope) -> DetectionResult<Vec<String>>;
}
