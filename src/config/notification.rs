//! Plagiarism alert configuration module.
//!
//! This module defines configuration for the notification adapter that
//! delivers alerts when a submission is flagged.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether flagged submissions trigger an alert at all
    pub enabled: bool,

    /// Subject line for alert messages
    pub subject: String,

    /// Body template for alert messages. Supports the `{assignment_id}`,
    /// `{score_percent}` and `{threshold_percent}` placeholders.
    pub body_template: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            subject: "Plagiarism Alert".to_string(),
            body_template: "Your submission for assignment {assignment_id} was flagged \
                            with a similarity score of {score_percent}% (threshold \
                            {threshold_percent}%). Please contact your instructor."
                .to_string(),
        }
    }
}

impl Validate for NotificationConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate subject
        if self.subject.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Notification subject cannot be empty".to_string(),
            ));
        }

        // Validate body_template
        if self.body_template.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Notification body template cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
