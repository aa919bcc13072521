//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the desired process exit code.

mod questions;
mod run;
mod score;

pub use questions::{run_questions, QuestionsConfig};
pub use run::{run_assessment, RunConfig};
pub use score::{run_score, ScoreConfig};
