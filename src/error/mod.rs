//! Error module for the Kope Scan engine.
//!
//! This module provides a comprehensive error handling framework for the entire application,
//! following Rust's idiomatic error handling patterns with explicit error types,
//! proper error propagation, and helpful context information.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;
use tracing_error::SpanTrace;

pub mod config;
pub mod detection;
pub mod notification;

/// Result type alias used throughout the Kope Scan engine.
pub type KopeResult<T> = Result<T, KopeError>;

/// Core error enum for the Kope Scan engine.
#[derive(Error, Debug)]
pub enum KopeError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while checking a submission for plagiarism.
    #[error("Detection error: {0}")]
    Detection(#[from] detection::DetectionError),

    /// Errors raised while delivering a plagiarism alert.
    #[error("Notification error: {0}")]
    Notification(#[from] notification::NotificationError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: KopeError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Span trace captured at the point the error was contextualized.
    pub trace: Option<SpanTrace>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: KopeError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
            trace: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Captures the current span trace into the error context.
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(SpanTrace::capture());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            trace = context
                .trace
                .as_ref()
                .map(ToString::to_string)
                .as_deref()
                .unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter slot.
static ERROR_REPORTING: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *ERROR_REPORTING.write() = Some(reporter);
}

/// Report an error through the global reporter.
///
/// Falls back to standard error output if no reporter is configured.
///
/// # Arguments
///
/// * `context` - The error context to report
pub fn report_error(context: ErrorContext) {
    let reporter = ERROR_REPORTING.read().clone();
    match reporter {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
