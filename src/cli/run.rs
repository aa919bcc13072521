//! Run command handler.
//!
//! Launches the interactive TUI assessment and optionally emits a final
//! report once the respondent completes it.

use crate::pipeline::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{render, ReportConfig, ReportFormat};
use crate::scoring::AssessmentScorer;
use crate::session::Navigator;
use crate::tui::{run_tui, App, ColorScheme};
use anyhow::{bail, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Run command configuration
pub struct RunConfig {
    /// Subject name shown on the dashboard
    pub subject: String,
    /// Theme name ("dark" or "light")
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Final report format once completed (none: TUI display only)
    pub report: Option<ReportFormat>,
    /// Final report file path
    pub output_file: Option<PathBuf>,
    /// Disable colored output in the final report
    pub no_color: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the interactive assessment, returning the desired exit code.
pub fn run_assessment(config: RunConfig) -> Result<i32> {
    if !std::io::stdout().is_terminal() {
        bail!("the interactive assessment requires a terminal; use `skillscope score` instead");
    }

    let navigator = Navigator::new(AssessmentScorer::standard(), config.subject);
    let mut app = App::new(navigator, ColorScheme::from_name(&config.theme));

    run_tui(&mut app, config.tick_rate_ms)?;

    let Some(outcome) = app.outcome() else {
        tracing::info!("assessment left before completion; nothing to report");
        return Ok(exit_codes::SUCCESS);
    };

    if config.report.is_some() || config.output_file.is_some() {
        let format = match config.report.unwrap_or(ReportFormat::Summary) {
            ReportFormat::Auto | ReportFormat::Tui => ReportFormat::Summary,
            other => other,
        };
        let report = render(
            outcome,
            format,
            &ReportConfig::default(),
            should_use_color(config.no_color),
        )?;
        let target = OutputTarget::from_option(config.output_file);
        write_output(&report, &target, config.quiet)?;
    }

    Ok(exit_codes::SUCCESS)
}
