//! Configuration types for skillscope.
//!
//! Structured configuration loadable from a YAML file, with CLI flags
//! layered on top.

use crate::error::SkillscopeError;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Unified application configuration that can be loaded from CLI args or
/// config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output preferences (format, colors)
    pub output: OutputPreferences,
    /// TUI preferences (theme, tick rate)
    pub tui: TuiPreferences,
    /// Subject the assessment belongs to
    pub subject: SubjectConfig,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputPreferences {
    /// Default report format
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
}

/// TUI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiPreferences {
    /// Color theme name ("dark" or "light")
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: 250,
        }
    }
}

/// Subject identity used on dashboards and reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SubjectConfig {
    /// Display name; falls back to "anonymous" when unset
    pub name: Option<String>,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), SkillscopeError> {
        match self.tui.theme.as_str() {
            "dark" | "light" => {}
            other => {
                return Err(SkillscopeError::Config(format!(
                    "unknown theme: {other} (expected dark or light)"
                )));
            }
        }
        if !(50..=2000).contains(&self.tui.tick_rate_ms) {
            return Err(SkillscopeError::Config(format!(
                "tick_rate_ms {} out of range (50-2000)",
                self.tui.tick_rate_ms
            )));
        }
        Ok(())
    }

    /// Effective subject name.
    #[must_use]
    pub fn subject_name(&self) -> &str {
        self.subject.name.as_deref().unwrap_or("anonymous")
    }
}
