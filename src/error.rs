//! Unified error types for skillscope.
//!
//! Scoring itself is total and never fails; errors only arise at the
//! edges — reading response files, loading configuration, writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for skillscope operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SkillscopeError {
    /// Errors while reading a saved response file
    #[error("Failed to load responses from {path:?}")]
    ResponseFile {
        path: PathBuf,
        #[source]
        source: ResponseFileErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific response-file error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResponseFileErrorKind {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON structure: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
