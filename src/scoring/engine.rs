//! Tally and normalization: the core scoring pass.
//!
//! Scoring is a total function over any response set. Responses that
//! reference an unknown question id or an out-of-range option index are
//! skipped, never surfaced as errors.

use crate::model::{Dimension, QuestionCatalog, ResponseSet};
use crate::scoring::adjust::apply_adjustments;
use crate::scoring::dashboard::{dashboard, Dashboard};
use crate::scoring::recommend::{recommendations, Recommendation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maximum single-option weight across the question set.
pub const W_MAX: i32 = 4;
/// Minimum single-option weight across the question set.
pub const W_MIN: i32 = -3;

/// Scores below this are Low and trigger recommendations.
pub const LOW_THRESHOLD: f32 = 40.0;
/// Scores at or above this are High.
pub const HIGH_THRESHOLD: f32 = 70.0;

/// Running totals for one dimension during the tally step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionTally {
    /// Sum of weights contributed by answered options
    pub raw_sum: i32,
    /// Number of contributing answers
    pub count: u32,
}

/// Normalized per-dimension scores in [0, 100].
///
/// Always carries an entry for every dimension, in canonical order. A
/// card is produced from scratch by each scoring pass; there is no
/// incremental mutation of previous results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreCard {
    scores: IndexMap<Dimension, f32>,
}

impl ScoreCard {
    /// A card with every dimension at 0.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            scores: Dimension::ALL.iter().map(|&d| (d, 0.0)).collect(),
        }
    }

    /// A card with the given scores; unlisted dimensions stay 0.
    #[must_use]
    pub fn from_pairs(pairs: &[(Dimension, f32)]) -> Self {
        let mut card = Self::zeroed();
        for &(dim, score) in pairs {
            card.set(dim, score);
        }
        card
    }

    /// Score for a dimension.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> f32 {
        self.scores.get(&dimension).copied().unwrap_or(0.0)
    }

    pub(crate) fn set(&mut self, dimension: Dimension, score: f32) {
        self.scores.insert(dimension, score);
    }

    /// Iterate scores in canonical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        self.scores.iter().map(|(&d, &s)| (d, s))
    }

    /// Unweighted mean over all dimensions.
    #[must_use]
    pub fn mean(&self) -> f32 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.scores.values().sum();
        sum / self.scores.len() as f32
    }
}

/// Qualitative bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    /// Below 40
    Low,
    /// 40 to 69
    Medium,
    /// 70 and above
    High,
}

impl ScoreLevel {
    /// Bucket a score using the fixed thresholds.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score < LOW_THRESHOLD {
            Self::Low
        } else if score < HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Bucket name for display.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tally per-dimension weight sums and contribution counts.
///
/// Every dimension gets an entry even when nothing contributed to it.
#[must_use]
pub fn tally(
    catalog: &QuestionCatalog,
    responses: &ResponseSet,
) -> IndexMap<Dimension, DimensionTally> {
    let mut tallies: IndexMap<Dimension, DimensionTally> = Dimension::ALL
        .iter()
        .map(|&d| (d, DimensionTally::default()))
        .collect();

    for (question_id, option_index) in responses.iter() {
        let Some(question) = catalog.get(question_id) else {
            tracing::debug!(question_id, "skipping response for unknown question");
            continue;
        };
        let Some(option) = question.option(option_index) else {
            tracing::debug!(
                question_id,
                option_index,
                "skipping response with out-of-range option"
            );
            continue;
        };
        for (&dimension, &weight) in &option.weights {
            let entry = tallies.entry(dimension).or_default();
            entry.raw_sum += i32::from(weight);
            entry.count += 1;
        }
    }

    tallies
}

/// Rescale one dimension's raw sum into [0, 100].
///
/// `count == 0` is defined as 0; equal bounds (only possible when
/// `w_max == w_min`) is defined as 50.
#[must_use]
pub fn normalized_score(raw_sum: i32, count: u32, w_max: i32, w_min: i32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let max_possible = count as i32 * w_max;
    let min_possible = count as i32 * w_min;
    if max_possible == min_possible {
        return 50.0;
    }
    let span = (max_possible - min_possible) as f32;
    let normalized = ((raw_sum - min_possible) as f32 / span) * 100.0;
    normalized.clamp(0.0, 100.0)
}

/// Normalize tallied sums into a score card using the fixed weight bounds.
#[must_use]
pub fn normalize(tallies: &IndexMap<Dimension, DimensionTally>) -> ScoreCard {
    let mut card = ScoreCard::zeroed();
    for (&dimension, t) in tallies {
        card.set(dimension, normalized_score(t.raw_sum, t.count, W_MAX, W_MIN));
    }
    card
}

/// Everything derived from one completed scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    /// Adjusted per-dimension scores
    pub scores: ScoreCard,
    /// Development recommendations for Low dimensions
    pub recommendations: Vec<Recommendation>,
    /// Aggregated dashboard view
    pub dashboard: Dashboard,
}

/// Scoring engine bound to a question catalog.
#[derive(Debug, Clone)]
pub struct AssessmentScorer {
    catalog: QuestionCatalog,
}

impl AssessmentScorer {
    /// Create a scorer for the given catalog.
    #[must_use]
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Scorer over the standard built-in catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    /// The catalog this scorer tallies against.
    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Full scoring pass: tally, normalize, then cross-dimension
    /// adjustments.
    #[must_use]
    pub fn score(&self, responses: &ResponseSet) -> ScoreCard {
        let mut card = normalize(&tally(&self.catalog, responses));
        apply_adjustments(&mut card);
        card
    }

    /// Scoring pass plus recommendations and dashboard aggregation.
    #[must_use]
    pub fn outcome(&self, responses: &ResponseSet, subject: &str) -> AssessmentOutcome {
        let scores = self.score(responses);
        let recommendations = recommendations(&scores);
        let dashboard = dashboard(&scores, subject);
        AssessmentOutcome {
            scores,
            recommendations,
            dashboard,
        }
    }
}
