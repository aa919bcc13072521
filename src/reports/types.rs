//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Brief summary output
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Tui => write!(f, "tui"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Metadata stamped onto generated reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was rendered
    pub generated_at: DateTime<Utc>,
    /// Tool version that produced it
    pub tool_version: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Title override for the report
    pub title: Option<String>,
    /// Include the per-recommendation action lists
    pub show_actions: bool,
    /// Render-time metadata
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_actions: true,
            metadata: ReportMetadata::default(),
        }
    }
}

impl ReportConfig {
    /// Effective report title.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Leadership Assessment Results")
    }
}
