//! **A scenario-based leadership self-assessment for the terminal.**
//!
//! `skillscope` presents ten fixed multiple-choice scenario questions,
//! accumulates per-dimension weighted scores from the choices, normalizes
//! them to a 0-100 scale, and renders a results dashboard with development
//! recommendations. It powers both an interactive TUI and a headless CLI
//! for scoring saved response files.
//!
//! ## Key Features
//!
//! - **Fixed question catalog**: ten real-world leadership scenarios, each
//!   with 3-4 weighted answer options.
//! - **Pure scoring engine**: tally, normalization, ordered cross-dimension
//!   adjustments, Low/Medium/High bucketing - a deterministic function of
//!   the response set.
//! - **Dashboard aggregation**: overall score, strengths and development
//!   areas, a leadership style label, and an innovation potential index.
//! - **Flexible reporting**: JSON, Markdown, colored terminal summary, and
//!   a full-screen interactive TUI.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the question catalog, dimensions and response sets.
//! - **[`scoring`]**: the scoring pass and everything derived from it.
//! - **[`session`]**: the assessment as an immutable state machine; the
//!   TUI feeds it events and renders whatever state comes back.
//! - **[`reports`]**: textual report generators behind a common trait.
//! - **[`tui`]**: the interactive ratatui front end.
//! - **[`cli`]** and **[`config`]**: command handlers and the YAML
//!   configuration layer.
//!
//! ## Library Usage
//!
//! ```
//! use skillscope::model::ResponseSet;
//! use skillscope::scoring::{AssessmentScorer, ScoreLevel};
//!
//! let scorer = AssessmentScorer::standard();
//! let responses: ResponseSet = [(1, 1), (2, 2), (3, 1)].into_iter().collect();
//! let outcome = scorer.outcome(&responses, "jane");
//!
//! for (dimension, score) in outcome.scores.iter() {
//!     println!("{}: {:.1} ({})", dimension.label(), score, ScoreLevel::from_score(score));
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize↔f32/f64/u16 casts are pervasive in TUI layout math
    // and score arithmetic — all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod session;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, OutputPreferences, SubjectConfig, TuiPreferences};
pub use error::SkillscopeError;
pub use model::{Dimension, Question, QuestionCatalog, ResponseSet};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    AssessmentOutcome, AssessmentScorer, Dashboard, Recommendation, ScoreCard, ScoreLevel,
};
pub use session::{Navigator, Session, SessionEvent};
