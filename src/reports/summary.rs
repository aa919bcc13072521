//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::{AssessmentOutcome, ScoreLevel};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const BAR_WIDTH: usize = 10;

fn score_bar(score: f32) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn level_color(&self, level: ScoreLevel) -> &'static str {
        match level {
            ScoreLevel::Low => "red",
            ScoreLevel::Medium => "yellow",
            ScoreLevel::High => "green",
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        outcome: &AssessmentOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let dashboard = &outcome.dashboard;

        // Header
        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {}",
            self.color("Subject:", "cyan"),
            dashboard.subject
        ));

        let overall_level = ScoreLevel::from_score(dashboard.overall_score);
        lines.push(format!(
            "{}  {:.1}/100 ({})",
            self.color("Overall:", "cyan"),
            dashboard.overall_score,
            self.color(overall_level.name(), self.level_color(overall_level))
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Style:", "cyan"),
            dashboard.style_label
        ));
        lines.push(format!(
            "{}  {:.1}/100",
            self.color("Innovation:", "cyan"),
            dashboard.innovation_potential
        ));

        lines.push(String::new());
        lines.push(self.color("Dimensions:", "bold"));
        for entry in &dashboard.dimensions {
            lines.push(format!(
                "  {:<22} {} {:>5.1}  {}",
                entry.label,
                score_bar(entry.score),
                entry.score,
                self.color(entry.level.name(), self.level_color(entry.level))
            ));
        }

        let strengths: Vec<&str> = dashboard
            .top_strengths
            .iter()
            .map(|d| d.label())
            .collect();
        let development: Vec<&str> = dashboard
            .development_areas
            .iter()
            .map(|d| d.label())
            .collect();
        lines.push(String::new());
        lines.push(format!(
            "{}  {}",
            self.color("Strengths:", "green"),
            strengths.join(", ")
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Development:", "yellow"),
            development.join(", ")
        ));

        if !outcome.recommendations.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recommendations:", "bold"));
            for rec in &outcome.recommendations {
                lines.push(format!(
                    "  {}. {} - {}",
                    rec.priority,
                    self.color(&rec.title, "cyan"),
                    rec.description
                ));
                if config.show_actions {
                    for action in &rec.actions {
                        lines.push(format!("     - {action}"));
                    }
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
