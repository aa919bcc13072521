//! Report generation for assessment outcomes.
//!
//! This module provides multiple output formats for a completed
//! assessment:
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//! - Summary: compact shell-friendly output
//!
//! The interactive TUI dashboard is a separate surface ([`crate::tui`]);
//! report generators here are purely textual.

mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::scoring::AssessmentOutcome;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a completed assessment
    fn generate(
        &self,
        outcome: &AssessmentOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write the report to a writer
    fn write_report(
        &self,
        outcome: &AssessmentOutcome,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(outcome, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Render an outcome in the requested textual format.
///
/// `Auto` must be resolved by the caller first; `Tui` is interactive and
/// has no textual rendering.
pub fn render(
    outcome: &AssessmentOutcome,
    format: ReportFormat,
    config: &ReportConfig,
    colored: bool,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => JsonReporter::new().generate(outcome, config),
        ReportFormat::Markdown => MarkdownReporter::new().generate(outcome, config),
        ReportFormat::Summary => {
            let reporter = if colored {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            reporter.generate(outcome, config)
        }
        ReportFormat::Auto | ReportFormat::Tui => Err(ReportError::ConfigError(format!(
            "{format} is not a textual report format"
        ))),
    }
}
