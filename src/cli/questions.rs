//! Questions command handler.
//!
//! Prints the built-in question catalog in the requested format.

use crate::model::QuestionCatalog;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Questions command configuration
pub struct QuestionsConfig {
    /// Requested output format
    pub output: ReportFormat,
    /// Output file path (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the questions command, returning the desired exit code.
pub fn run_questions(config: QuestionsConfig) -> Result<i32> {
    let catalog = QuestionCatalog::standard();

    let output = match config.output {
        ReportFormat::Json => format_json(&catalog)?,
        ReportFormat::Markdown => format_markdown(&catalog)?,
        _ => format_text(&catalog),
    };

    let target = OutputTarget::from_option(config.output_file);
    write_output(&output, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}

fn format_json(catalog: &QuestionCatalog) -> Result<String> {
    let questions: Vec<_> = catalog.iter().collect();
    let envelope = json!({
        "tool": "skillscope",
        "version": env!("CARGO_PKG_VERSION"),
        "questions": questions,
    });
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn format_markdown(catalog: &QuestionCatalog) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Question Catalog")?;
    for question in catalog.iter() {
        writeln!(out)?;
        writeln!(
            out,
            "## {}. {} ({})",
            question.id,
            question.category.name(),
            question.options.len()
        )?;
        writeln!(out)?;
        writeln!(out, "{}", question.prompt)?;
        writeln!(out)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, option.text)?;
        }
    }
    Ok(out)
}

fn format_text(catalog: &QuestionCatalog) -> String {
    let mut lines = Vec::new();
    for question in catalog.iter() {
        lines.push(format!(
            "{:>2}. [{}] {}",
            question.id,
            question.category.name(),
            question.prompt
        ));
        for (index, option) in question.options.iter().enumerate() {
            lines.push(format!("      {}) {}", index + 1, option.text));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}
