//! Configuration module for skillscope.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument layering on top of file settings
//!
//! # Configuration File
//!
//! Place a `.skillscope.yaml` file in your project root or
//! `~/.config/skillscope/`:
//!
//! ```yaml
//! subject:
//!   name: jane
//! output:
//!   no_color: true
//! tui:
//!   theme: light
//! ```

pub mod file;
mod types;

pub use file::{discover_config_file, load_config_file, load_or_default, ConfigFileError};
pub use types::{AppConfig, OutputPreferences, SubjectConfig, TuiPreferences};

/// Generate the JSON schema for the configuration file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mentions_top_level_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"tui\""));
        assert!(schema.contains("\"subject\""));
    }
}
