// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Similarity scanner built on the Aho-Corasick pattern automaton.
//!
//! A scan builds a fresh automaton from the corpus, streams the candidate
//! through it once, and condenses the match events into a
//! [`SimilarityReport`]. The automaton is deliberately rebuilt per check:
//! corpora differ per assignment and per request, and construction cost is
//! linear in corpus size.

use tracing::debug;

use crate::config::detection::{DetectionConfig, ScoringMode};
use crate::data_structures::aho_corasick_automaton::{
    AutomatonError, PatternAutomaton, ScanCancellation,
};
use crate::error::detection::{DetectionError, DetectionResult};

use super::types::{SimilarityReport, Verdict};

/// Compares candidate texts against a corpus of prior submissions.
#[derive(Debug, Clone)]
pub struct SimilarityScanner {
    config: DetectionConfig,
}

impl SimilarityScanner {
    /// Creates a scanner with the given detection configuration.
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Returns the scanner's configuration.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Checks one candidate text against a corpus of prior texts.
    ///
    /// Empty corpus entries are skipped; a corpus with no usable entries
    /// produces a clean report with a score of zero. Duplicate entries are
    /// collapsed by the automaton and cannot inflate the score.
    ///
    /// # Arguments
    ///
    /// * `candidate` - The submitted text to score
    /// * `corpus` - Prior texts to compare against
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::EmptyInput`] for an empty candidate and
    /// [`DetectionError::CandidateTooLarge`] when the candidate exceeds the
    /// configured character bound.
    pub fn check_similarity(
        &self,
        candidate: &str,
        corpus: &[String],
    ) -> DetectionResult<SimilarityReport> {
        self.run(candidate, corpus, None)
    }

    /// Checks a candidate like [`check_similarity`](Self::check_similarity),
    /// additionally observing a cancellation token during the scan.
    ///
    /// A check whose token fires mid-scan fails with
    /// [`DetectionError::Cancelled`]; it never reports a clean verdict.
    pub fn check_similarity_cancellable(
        &self,
        candidate: &str,
        corpus: &[String],
        cancel: &ScanCancellation,
    ) -> DetectionResult<SimilarityReport> {
        self.run(candidate, corpus, Some(cancel))
    }

    fn run(
        &self,
        candidate: &str,
        corpus: &[String],
        cancel: Option<&ScanCancellation>,
    ) -> DetectionResult<SimilarityReport> {
        if candidate.is_empty() {
            return Err(DetectionError::EmptyInput);
        }

        let candidate_chars = candidate.chars().count();
        if candidate_chars > self.config.max_candidate_chars {
            return Err(DetectionError::CandidateTooLarge {
                chars: candidate_chars,
                max: self.config.max_candidate_chars,
            });
        }

        let patterns: Vec<&str> = corpus
            .iter()
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .collect();
        let skipped = corpus.len() - patterns.len();
        if skipped > 0 {
            debug!(skipped, "ignoring empty corpus entries");
        }

        if patterns.is_empty() {
            debug!(candidate_chars, "no usable corpus entries, reporting clean");
            return Ok(SimilarityReport {
                verdict: Verdict::Clean,
                score_percent: 0.0,
                threshold_percent: self.config.threshold_percent,
                hit_count: 0,
                patterns_considered: 0,
                candidate_chars,
            });
        }

        let mut automaton =
            PatternAutomaton::with_capacity(patterns.iter().map(|p| p.len()).sum());
        for pattern in &patterns {
            automaton.add_pattern(pattern)?;
        }
        automaton.build()?;

        let stream = match cancel {
            Some(token) => automaton.search_cancellable(candidate, token.clone())?,
            None => automaton.search(candidate)?,
        };

        let mut hit_count = 0usize;
        let mut covered = match self.config.scoring {
            ScoringMode::CharacterCoverage => Some(vec![false; candidate_chars]),
            ScoringMode::MatchEvents => None,
        };

        for event in stream {
            let event = event.map_err(stream_error)?;
            hit_count += 1;
            if let Some(covered) = covered.as_mut() {
                if let Some(len) = automaton.pattern_char_len(event.pattern) {
                    let start = (event.end + 1).saturating_sub(len);
                    for slot in &mut covered[start..=event.end] {
                        *slot = true;
                    }
                }
            }
        }

        let score_percent = match covered {
            Some(covered) => {
                let covered_chars = covered.iter().filter(|&&hit| hit).count();
                covered_chars as f64 / candidate_chars as f64 * 100.0
            }
            None => hit_count as f64 / candidate_chars as f64 * 100.0,
        };

        let verdict = if score_percent > self.config.threshold_percent {
            Verdict::Flagged
        } else {
            Verdict::Clean
        };

        debug!(
            patterns = automaton.pattern_count(),
            candidate_chars,
            hit_count,
            score_percent,
            verdict = ?verdict,
            "similarity scan complete"
        );

        Ok(SimilarityReport {
            verdict,
            score_percent,
            threshold_percent: self.config.threshold_percent,
            hit_count,
            patterns_considered: automaton.pattern_count(),
            candidate_chars,
        })
    }
}

impl Default for SimilarityScanner {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

fn stream_error(error: AutomatonError) -> DetectionError {
    match error {
        AutomatonError::Cancelled => DetectionError::Cancelled,
        other => DetectionError::Automaton(other),
    }
}
