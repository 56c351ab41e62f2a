// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Plagiarism checking service.
//!
//! Orchestrates a complete check: resolve the corpus scope, fetch prior
//! texts from the submission store, run the similarity scan on a blocking
//! worker, and hand flagged reports to the notifier. Scans are CPU-bound,
//! so a semaphore caps how many run at once regardless of how many checks
//! are in flight.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::config::detection::DetectionConfig;
use crate::config::notification::NotificationConfig;
use crate::data_structures::aho_corasick_automaton::ScanCancellation;
use crate::error::detection::{DetectionError, DetectionResult};

use super::corpus::{CorpusScope, SubmissionStore};
use super::notifier::{AlertTransport, PlagiarismNotifier};
use super::scanner::SimilarityScanner;
use super::types::{CheckOutcome, NotificationStatus, SubmissionCheckRequest};

/// End-to-end plagiarism checker over a submission store and an alert
/// transport.
pub struct PlagiarismChecker<S, T> {
    store: Arc<S>,
    scanner: Arc<SimilarityScanner>,
    notifier: PlagiarismNotifier<T>,
    scan_permits: Arc<Semaphore>,
}

impl<S, T> PlagiarismChecker<S, T>
where
    S: SubmissionStore,
    T: AlertTransport,
{
    /// Creates a checker.
    ///
    /// # Arguments
    ///
    /// * `store` - Source of prior submission texts
    /// * `transport` - Delivery channel for plagiarism alerts
    /// * `detection` - Scanner configuration; also caps scan concurrency
    /// * `notification` - Alert configuration
    pub fn new(
        store: Arc<S>,
        transport: T,
        detection: DetectionConfig,
        notification: NotificationConfig,
    ) -> Self {
        let scan_permits = Arc::new(Semaphore::new(detection.max_concurrent_checks));
        Self {
            store,
            scanner: Arc::new(SimilarityScanner::new(detection)),
            notifier: PlagiarismNotifier::new(transport, notification),
            scan_permits,
        }
    }

    /// Checks one submission against its corpus and alerts on a flagged
    /// verdict.
    ///
    /// Notification failures do not fail the check; the outcome records
    /// them as [`NotificationStatus::Failed`] so callers can retry alerts
    /// without rescanning.
    pub async fn check_submission(
        &self,
        request: SubmissionCheckRequest,
    ) -> DetectionResult<CheckOutcome> {
        self.check_submission_cancellable(request, ScanCancellation::new())
            .await
    }

    /// Checks one submission like [`check_submission`](Self::check_submission),
    /// additionally observing a cancellation token during the scan.
    pub async fn check_submission_cancellable(
        &self,
        request: SubmissionCheckRequest,
        cancel: ScanCancellation,
    ) -> DetectionResult<CheckOutcome> {
        if request.candidate_text.is_empty() {
            return Err(DetectionError::EmptyInput);
        }

        let scope = CorpusScope::for_request(
            self.scanner.config().corpus_scope,
            &request.assignment_id,
        );
        let corpus = self.store.fetch_prior_texts(&scope).await?;

        let permit = self
            .scan_permits
            .acquire()
            .await
            .map_err(|_| DetectionError::Cancelled)?;
        let scanner = Arc::clone(&self.scanner);
        let candidate = request.candidate_text.clone();
        let report = tokio::task::spawn_blocking(move || {
            scanner.check_similarity_cancellable(&candidate, &corpus, &cancel)
        })
        .await
        .map_err(|e| DetectionError::Internal(e.to_string()))??;
        drop(permit);

        let notification = if report.verdict.is_flagged() {
            info!(
                assignment_id = %request.assignment_id,
                score_percent = report.score_percent,
                hit_count = report.hit_count,
                "submission flagged for plagiarism"
            );
            match self.notifier.notify(&request, &report).await {
                Ok(status) => status,
                Err(e) => {
                    warn!(
                        assignment_id = %request.assignment_id,
                        error = %e,
                        "failed to deliver plagiarism alert"
                    );
                    NotificationStatus::Failed(e.to_string())
                }
            }
        } else {
            NotificationStatus::Skipped
        };

        Ok(CheckOutcome {
            report,
            notification,
        })
    }

    /// Checks a batch of submissions concurrently.
    ///
    /// Each submission is checked independently; one failing check does not
    /// abort the others. Results are returned in request order.
    pub async fn check_submissions(
        &self,
        requests: Vec<SubmissionCheckRequest>,
    ) -> Vec<DetectionResult<CheckOutcome>> {
        let checks = requests
            .into_iter()
            .map(|request| self.check_submission(request));
        futures::future::join_all(checks).await
    }
}
