//! Notification error module.
//!
//! This module defines error types raised while delivering plagiarism
//! alerts through the configured transport.

use thiserror::Error;

/// Errors that can occur during alert delivery.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotificationError {
    /// Error when the alert has no recipient address.
    #[error("Alert recipient address cannot be empty")]
    EmptyRecipient,

    /// Error when the underlying transport fails to deliver the alert.
    #[error("Alert transport failed: {0}")]
    Transport(String),
}

/// A specialized `Result` type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;
