//! Command-line front end: analyze one screenshot and render the report

use crate::analysis::analyzer::analyze;
use crate::io::error::{AnalyzerError, Result};
use crate::io::progress::AnalysisSpinner;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Heading plus one labeled line per metric
    Text,
    /// JSON object keyed by metric name
    Json,
}

#[derive(Parser)]
#[command(name = "uiload")]
#[command(
    author,
    version,
    about = "Estimate the cognitive load of a user interface screenshot"
)]
/// Command-line arguments for the analyzer
pub struct Cli {
    /// Screenshot to analyze (PNG or JPEG)
    #[arg(value_name = "IMAGE")]
    pub target: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if the spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum log level selected by the verbosity count
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

/// Runs one analysis for the parsed arguments
pub struct ReportRunner {
    cli: Cli,
}

impl ReportRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Analyze the target image and render the report
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is a directory ([`AnalyzerError::FileSystem`])
    /// - The image cannot be decoded ([`AnalyzerError::ImageLoad`])
    /// - The image has no pixels ([`AnalyzerError::InvalidImage`])
    /// - The report cannot be serialized ([`AnalyzerError::Output`])
    pub fn run(&self) -> Result<String> {
        self.validate_target()?;

        let spinner = self
            .cli
            .should_show_progress()
            .then(|| AnalysisSpinner::start(&self.cli.target));

        let outcome = analyze(&self.cli.target);

        if let Some(ref sp) = spinner {
            if outcome.is_ok() {
                sp.finish();
            } else {
                sp.fail();
            }
        }

        let result = outcome?;
        match self.cli.format {
            OutputFormat::Text => Ok(result.to_text()),
            OutputFormat::Json => result.to_json().map(|json| json + "\n"),
        }
    }

    // One image per invocation; directories are not expanded
    fn validate_target(&self) -> Result<()> {
        if self.cli.target.is_dir() {
            return Err(AnalyzerError::FileSystem {
                path: self.cli.target.clone(),
                operation: "open image",
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "target is a directory, expected a single image file",
                ),
            });
        }
        Ok(())
    }
}

/// User-facing message for a failed run, printed on stderr
pub fn failure_message(error: &AnalyzerError) -> String {
    format!("error: {error}")
}
