// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Notification adapter that turns flagged reports into alerts.
//!
//! The adapter owns the alert policy: clean verdicts are never announced,
//! disabled configuration suppresses delivery entirely, and message bodies
//! are rendered from the configured template. Actual delivery is delegated
//! to an [`AlertTransport`] implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::config::notification::NotificationConfig;
use crate::error::notification::{NotificationError, NotificationResult};

use super::types::{NotificationStatus, SimilarityReport, SubmissionCheckRequest};

/// Delivery channel for plagiarism alerts.
///
/// Implementations wrap whatever actually carries the message; the adapter
/// only guarantees that `send` is called with a non-empty recipient.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertTransport: Send + Sync {
    /// Delivers one alert message.
    ///
    /// # Arguments
    ///
    /// * `recipient` - Destination address
    /// * `subject` - Alert subject line
    /// * `body` - Rendered alert body
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> NotificationResult<()>;
}

/// Sends plagiarism alerts for flagged similarity reports.
#[derive(Debug)]
pub struct PlagiarismNotifier<T> {
    transport: T,
    config: NotificationConfig,
}

impl<T: AlertTransport> PlagiarismNotifier<T> {
    /// Creates a notifier delivering through `transport`.
    pub fn new(transport: T, config: NotificationConfig) -> Self {
        Self { transport, config }
    }

    /// Notifies the submitting student if their report was flagged.
    ///
    /// Clean reports and disabled configuration both result in
    /// [`NotificationStatus::Skipped`] without touching the transport.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::EmptyRecipient`] when a flagged report
    /// carries no recipient address, and propagates transport failures.
    pub async fn notify(
        &self,
        request: &SubmissionCheckRequest,
        report: &SimilarityReport,
    ) -> NotificationResult<NotificationStatus> {
        if !report.verdict.is_flagged() {
            return Ok(NotificationStatus::Skipped);
        }
        if !self.config.enabled {
            debug!(
                assignment_id = %request.assignment_id,
                "alerts disabled, skipping notification for flagged submission"
            );
            return Ok(NotificationStatus::Skipped);
        }
        if request.student_email.is_empty() {
            return Err(NotificationError::EmptyRecipient);
        }

        let body = self.render_body(request, report);
        self.transport
            .send(&request.student_email, &self.config.subject, &body)
            .await?;

        debug!(
            recipient = %request.student_email,
            assignment_id = %request.assignment_id,
            score_percent = report.score_percent,
            "plagiarism alert sent"
        );
        Ok(NotificationStatus::Sent)
    }

    fn render_body(&self, request: &SubmissionCheckRequest, report: &SimilarityReport) -> String {
        self.config
            .body_template
            .replace("{assignment_id}", &request.assignment_id)
            .replace("{score_percent}", &format!("{:.1}", report.score_percent))
            .replace(
                "{threshold_percent}",
                &format!("{:.1}", report.threshold_percent),
            )
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate;

    use crate::detection::types::Verdict;

    use super::*;

    fn request() -> SubmissionCheckRequest {
        SubmissionCheckRequest {
            assignment_id: "hw-3".to_string(),
            student_email: "student@example.edu".to_string(),
            candidate_text: "text".to_string(),
        }
    }

    fn report(verdict: Verdict) -> SimilarityReport {
        SimilarityReport {
            verdict,
            score_percent: 87.5,
            threshold_percent: 60.0,
            hit_count: 7,
            patterns_considered: 3,
            candidate_chars: 8,
        }
    }

    #[test]
    fn test_clean_report_skips_transport() {
        let mut transport = MockAlertTransport::new();
        transport.expect_send().never();

        let notifier = PlagiarismNotifier::new(transport, NotificationConfig::default());
        let status =
            tokio_test::block_on(notifier.notify(&request(), &report(Verdict::Clean))).unwrap();

        assert_eq!(status, NotificationStatus::Skipped);
    }

    #[test]
    fn test_disabled_config_skips_transport() {
        let mut transport = MockAlertTransport::new();
        transport.expect_send().never();

        let config = NotificationConfig {
            enabled: false,
            ..NotificationConfig::default()
        };
        let notifier = PlagiarismNotifier::new(transport, config);
        let status =
            tokio_test::block_on(notifier.notify(&request(), &report(Verdict::Flagged))).unwrap();

        assert_eq!(status, NotificationStatus::Skipped);
    }

    #[tokio::test]
    async fn test_flagged_report_renders_and_sends() {
        let mut transport = MockAlertTransport::new();
        transport
            .expect_send()
            .with(
                predicate::eq("student@example.edu"),
                predicate::eq("Plagiarism Alert"),
                predicate::function(|body: &str| {
                    body.contains("hw-3") && body.contains("87.5") && body.contains("60.0")
                }),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let notifier = PlagiarismNotifier::new(transport, NotificationConfig::default());
        let status = notifier
            .notify(&request(), &report(Verdict::Flagged))
            .await
            .unwrap();

        assert_eq!(status, NotificationStatus::Sent);
    }

    #[test]
    fn test_missing_recipient_is_rejected_before_send() {
        let mut transport = MockAlertTransport::new();
        transport.expect_send().never();

        let notifier = PlagiarismNotifier::new(transport, NotificationConfig::default());
        let mut anonymous = request();
        anonymous.student_email.clear();

        let result =
            tokio_test::block_on(notifier.notify(&anonymous, &report(Verdict::Flagged)));
        assert_eq!(result, Err(NotificationError::EmptyRecipient));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let mut transport = MockAlertTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _, _| Err(NotificationError::Transport("smtp down".to_string())));

        let notifier = PlagiarismNotifier::new(transport, NotificationConfig::default());
        let result = notifier.notify(&request(), &report(Verdict::Flagged)).await;

        assert_eq!(
            result,
            Err(NotificationError::Transport("smtp down".to_string()))
        );
    }
}
