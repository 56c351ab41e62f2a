// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Plagiarism detection pipeline.
//!
//! This module implements similarity checking for student submissions. A
//! [`SimilarityScanner`] scores a candidate text against a corpus of prior
//! submissions using the Aho-Corasick automaton; a [`PlagiarismChecker`]
//! wires the scanner to a [`SubmissionStore`] for corpus retrieval and a
//! [`PlagiarismNotifier`] that alerts students whose submissions exceed the
//! similarity threshold.

mod corpus;
mod notifier;
mod scanner;
mod service;
mod types;

// Re-exports
pub use corpus::{CorpusScope, SubmissionStore};
pub use notifier::{AlertTransport, PlagiarismNotifier};
pub use scanner::SimilarityScanner;
pub use service::PlagiarismChecker;
pub use types::{
    CheckOutcome, NotificationStatus, SimilarityReport, SubmissionCheckRequest, Verdict,
};
