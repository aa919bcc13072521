//! Scoring engine: tally, normalization, cross-dimension adjustment,
//! bucketing, recommendations and dashboard aggregation.
//!
//! The whole module is pure: a scoring pass is a deterministic function
//! of the response set, recomputed from scratch every time. Malformed
//! response references (unknown question id, out-of-range option index)
//! are skipped silently rather than failing the pass.
//!
//! # Usage
//!
//! ```
//! use skillscope::model::ResponseSet;
//! use skillscope::scoring::AssessmentScorer;
//!
//! let scorer = AssessmentScorer::standard();
//! let responses: ResponseSet = [(1, 1), (2, 2)].into_iter().collect();
//! let outcome = scorer.outcome(&responses, "jane");
//!
//! println!("Overall: {:.1}/100", outcome.dashboard.overall_score);
//! for rec in &outcome.recommendations {
//!     println!("- {}: {}", rec.dimension, rec.title);
//! }
//! ```

mod adjust;
mod dashboard;
mod engine;
mod recommend;

pub use adjust::{apply_adjustments, AdjustmentRule, ADJUSTMENT_RULES};
pub use dashboard::{
    dashboard, Dashboard, DimensionSummary, StyleRule, DEFAULT_STYLE_LABEL, INNOVATION_WEIGHTS,
    STYLE_RULES,
};
pub use engine::{
    normalize, normalized_score, tally, AssessmentOutcome, AssessmentScorer, DimensionTally,
    ScoreCard, ScoreLevel, HIGH_THRESHOLD, LOW_THRESHOLD, W_MAX, W_MIN,
};
pub use recommend::{recommendations, Recommendation};
