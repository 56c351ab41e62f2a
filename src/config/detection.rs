//! Similarity detection configuration module.
//!
//! This module defines configuration for the similarity scanner itself,
//! including the flagging threshold, the scoring metric, and bounds on
//! candidate size and scan concurrency.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Scoring metric used to turn match events into a similarity percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Score is the raw number of match events divided by the candidate
    /// character count. Overlapping patterns can push this above 100.
    MatchEvents,
    /// Score is the fraction of candidate characters covered by at least
    /// one match, bounded to 100.
    CharacterCoverage,
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::MatchEvents
    }
}

/// Which prior submissions form the comparison corpus for a check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CorpusScopeStrategy {
    /// Compare only against prior submissions for the same assignment
    PerAssignment,
    /// Compare against every stored submission
    SystemWide,
}

impl Default for CorpusScopeStrategy {
    fn default() -> Self {
        Self::PerAssignment
    }
}

/// Similarity detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Similarity percentage above which a submission is flagged
    pub threshold_percent: f64,

    /// Scoring metric for the similarity percentage
    pub scoring: ScoringMode,

    /// Corpus selection strategy for each check
    pub corpus_scope: CorpusScopeStrategy,

    /// Maximum candidate size in characters accepted for a single check
    pub max_candidate_chars: usize,

    /// Maximum number of scans allowed to run concurrently
    pub max_concurrent_checks: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold_percent: 60.0,
            scoring: ScoringMode::default(),
            corpus_scope: CorpusScopeStrategy::default(),
            max_candidate_chars: 1_000_000,
            max_concurrent_checks: num_cpus::get(),
        }
    }
}

impl Validate for DetectionConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate threshold_percent
        if !self.threshold_percent.is_finite()
            || self.threshold_percent <= 0.0
            || self.threshold_percent > 100.0
        {
            return Err(ConfigError::ValueOutOfRange {
                key: "detection.threshold_percent".to_string(),
                message: "must be greater than 0 and at most 100".to_string(),
            });
        }

        // Validate max_candidate_chars
        if self.max_candidate_chars == 0 {
            return Err(ConfigError::ValidationError(
                "max_candidate_chars must be greater than 0".to_string(),
            ));
        }

        // Validate max_concurrent_checks
        if self.max_concurrent_checks == 0 {
            return Err(ConfigError::ValidationError(
                "max_concurrent_checks must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
