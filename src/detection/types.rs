// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core types exchanged by the plagiarism checking pipeline.

use serde::{Deserialize, Serialize};

/// Outcome of comparing a candidate against the corpus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Similarity score stayed at or below the threshold
    Clean,
    /// Similarity score exceeded the threshold
    Flagged,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Flagged`].
    pub fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// Result of a single similarity scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityReport {
    /// Whether the candidate was flagged
    pub verdict: Verdict,

    /// Similarity score as a percentage. Under match-event scoring this can
    /// exceed 100 when overlapping patterns recur densely.
    pub score_percent: f64,

    /// Threshold the score was compared against
    pub threshold_percent: f64,

    /// Number of match events observed during the scan
    pub hit_count: usize,

    /// Number of distinct patterns the automaton was built from
    pub patterns_considered: usize,

    /// Character length of the scanned candidate
    pub candidate_chars: usize,
}

/// A request to check one submission for plagiarism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionCheckRequest {
    /// Assignment the submission belongs to
    pub assignment_id: String,

    /// Address alerted if the submission is flagged
    pub student_email: String,

    /// The submitted text to check
    pub candidate_text: String,
}

/// What happened to the alert for a checked submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// No alert was attempted; the verdict was clean or alerts are disabled
    Skipped,
    /// The alert was handed to the transport successfully
    Sent,
    /// The alert was attempted and the transport failed
    Failed(String),
}

/// Combined result of a plagiarism check: the scan report plus the fate of
/// any alert it triggered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckOutcome {
    /// The similarity report for the submission
    pub report: SimilarityReport,

    /// Delivery status of the plagiarism alert
    pub notification: NotificationStatus,
}
