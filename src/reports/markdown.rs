//! Markdown report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::scoring::AssessmentOutcome;
use std::fmt::Write as _;

/// Markdown reporter for human-readable documents
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        outcome: &AssessmentOutcome,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let dashboard = &outcome.dashboard;

        writeln!(out, "# {}", config.title_or_default())?;
        writeln!(out)?;
        writeln!(
            out,
            "**Subject:** {} · generated {} by skillscope {}",
            dashboard.subject,
            config.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            config.metadata.tool_version
        )?;
        writeln!(out)?;

        writeln!(out, "## Overview")?;
        writeln!(out)?;
        writeln!(out, "- **Overall score:** {:.1}/100", dashboard.overall_score)?;
        writeln!(out, "- **Leadership style:** {}", dashboard.style_label)?;
        writeln!(
            out,
            "- **Innovation potential:** {:.1}/100",
            dashboard.innovation_potential
        )?;
        writeln!(out)?;

        writeln!(out, "## Dimension Scores")?;
        writeln!(out)?;
        writeln!(out, "| Dimension | Score | Level |")?;
        writeln!(out, "|-----------|-------|-------|")?;
        for entry in &dashboard.dimensions {
            writeln!(
                out,
                "| {} | {:.1} | {} |",
                entry.label,
                entry.score,
                entry.level.name()
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Strengths and Development Areas")?;
        writeln!(out)?;
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
        writeln!(out, "- **Top strengths:** {}", strengths.join(", "))?;
        writeln!(out, "- **Development areas:** {}", development.join(", "))?;
        writeln!(out)?;

        if outcome.recommendations.is_empty() {
            writeln!(out, "## Recommendations")?;
            writeln!(out)?;
            writeln!(out, "No development recommendations - all areas are on track.")?;
        } else {
            writeln!(out, "## Recommendations")?;
            for rec in &outcome.recommendations {
                writeln!(out)?;
                writeln!(out, "### {}. {} ({})", rec.priority, rec.title, rec.dimension)?;
                writeln!(out)?;
                writeln!(out, "{}", rec.description)?;
                if config.show_actions {
                    writeln!(out)?;
                    for action in &rec.actions {
                        writeln!(out, "- {action}")?;
                    }
                }
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResponseSet;
    use crate::scoring::AssessmentScorer;

    #[test]
    fn report_contains_expected_sections() {
        let outcome = AssessmentScorer::standard().outcome(&ResponseSet::new(), "jane");
        let report = MarkdownReporter::new()
            .generate(&outcome, &ReportConfig::default())
            .unwrap();

        assert!(report.contains("# Leadership Assessment Results"));
        assert!(report.contains("## Dimension Scores"));
        assert!(report.contains("| Leadership | 0.0 | Low |"));
        // Empty response set triggers the whole recommendation list
        assert!(report.contains("### 1. Develop Leadership Skills (LD)"));
    }

    #[test]
    fn actions_can_be_suppressed() {
        let outcome = AssessmentScorer::standard().outcome(&ResponseSet::new(), "jane");
        let config = ReportConfig {
            show_actions: false,
            ..ReportConfig::default()
        };
        let report = MarkdownReporter::new().generate(&outcome, &config).unwrap();
        assert!(!report.contains("- Leadership course"));
    }
}
