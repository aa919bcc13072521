//! Score command handler.
//!
//! Implements the `score` subcommand for assessing a saved response file
//! without the interactive TUI.

use crate::model::load_responses;
use crate::pipeline::{auto_detect_format, exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{render, ReportConfig, ReportFormat};
use crate::scoring::AssessmentScorer;
use anyhow::Result;
use std::path::PathBuf;

/// Score command configuration
pub struct ScoreConfig {
    /// Path to the saved response JSON file
    pub responses_path: PathBuf,
    /// Subject override; falls back to the file's subject, then "anonymous"
    pub subject: Option<String>,
    /// Requested report format
    pub output: ReportFormat,
    /// Output file path (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Fail (exit code 1) when the overall score is below this
    pub min_overall: Option<f32>,
    /// Suppress the per-recommendation action lists
    pub no_actions: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let document = load_responses(&config.responses_path)?;
    let subject = config
        .subject
        .or(document.subject)
        .unwrap_or_else(|| "anonymous".to_string());

    tracing::info!(
        answers = document.answers.len(),
        subject,
        "scoring response file"
    );

    let scorer = AssessmentScorer::standard();
    let outcome = scorer.outcome(&document.answers, &subject);

    // This is a headless command; interactive formats degrade to summary.
    let target = OutputTarget::from_option(config.output_file);
    let format = match auto_detect_format(config.output, &target) {
        ReportFormat::Auto | ReportFormat::Tui => ReportFormat::Summary,
        other => other,
    };

    let report_config = ReportConfig {
        show_actions: !config.no_actions,
        ..ReportConfig::default()
    };
    let report = render(
        &outcome,
        format,
        &report_config,
        should_use_color(config.no_color),
    )?;

    write_output(&report, &target, config.quiet)?;

    if let Some(threshold) = config.min_overall {
        if outcome.dashboard.overall_score < threshold {
            tracing::error!(
                "Overall score {:.1} is below minimum threshold {:.1}",
                outcome.dashboard.overall_score,
                threshold
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}
