//! Kope Scan - Main entrypoint.
//!
//! This is the main entry point for the Kope Scan command line tool.
//! It initializes the logging system, loads configuration, and runs
//! plagiarism checks against a corpus of prior texts.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use kope_scan_lib::config::detection::ScoringMode;
use kope_scan_lib::config::{self, ConfigLoader, KopeConfig, Validate};
use kope_scan_lib::detection::SimilarityScanner;
use kope_scan_lib::error::{set_error_reporter, KopeError, KopeResult, TracingErrorReporter};

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "KOPE";

/// Command line arguments for Kope Scan.
#[derive(Parser, Debug)]
#[clap(name = "Kope Scan", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check one candidate text against a directory of prior texts
    Check {
        /// Path to the candidate text file
        #[clap(value_parser)]
        candidate: PathBuf,

        /// Directory whose files form the comparison corpus
        #[clap(value_parser)]
        corpus_dir: PathBuf,

        /// Override the configured similarity threshold percentage
        #[clap(short, long, value_parser)]
        threshold: Option<f64>,

        /// Score by character coverage instead of raw match events
        #[clap(long)]
        coverage: bool,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> KopeResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| KopeError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads every regular file in `dir`, in name order, as one corpus entry each.
fn read_corpus_dir(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading corpus directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut corpus = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading corpus file {}", path.display()))?;
        corpus.push(text);
    }
    Ok(corpus)
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command {
        Command::Check {
            candidate,
            corpus_dir,
            threshold,
            coverage,
            json,
        } => {
            let loaded = config_loader
                .load()
                .context("loading configuration for check")?;
            config::init_global_config(loaded);

            let mut detection = config::get_global_config().get().detection.clone();
            if let Some(threshold) = threshold {
                detection.threshold_percent = threshold;
            }
            if coverage {
                detection.scoring = ScoringMode::CharacterCoverage;
            }
            detection
                .validate()
                .context("command line overrides produced an invalid configuration")?;

            let candidate_text = std::fs::read_to_string(&candidate)
                .with_context(|| format!("reading candidate file {}", candidate.display()))?;
            let corpus = read_corpus_dir(&corpus_dir)?;
            info!(
                corpus_entries = corpus.len(),
                candidate = %candidate.display(),
                "checking candidate against corpus"
            );

            let scanner = SimilarityScanner::new(detection);
            let report = scanner
                .check_similarity(&candidate_text, &corpus)
                .context("similarity check failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Verdict:    {:?}", report.verdict);
                println!("Score:      {:.2}%", report.score_percent);
                println!("Threshold:  {:.2}%", report.threshold_percent);
                println!("Matches:    {}", report.hit_count);
                println!("Patterns:   {}", report.patterns_considered);
                println!("Characters: {}", report.candidate_chars);
            }

            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KopeConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(KopeError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KopeError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(KopeError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
