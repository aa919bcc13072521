//! Dashboard aggregation over a score card.
//!
//! Overall mean, strength/development rankings, the leadership style
//! decision list and the innovation potential combination. Both the
//! style rules and the innovation coefficients are ordered data, not
//! conditional chains, so their sequencing is testable in isolation.

use super::engine::{ScoreCard, ScoreLevel};
use crate::model::Dimension;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-dimension entry on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    /// Dimension code
    pub dimension: Dimension,
    /// Human-readable label
    pub label: String,
    /// Adjusted score in [0, 100]
    pub score: f32,
    /// Qualitative bucket
    pub level: ScoreLevel,
}

/// Aggregated results view for a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Subject the assessment belongs to
    pub subject: String,
    /// Unweighted mean of all dimension scores
    pub overall_score: f32,
    /// All dimensions in canonical order
    pub dimensions: Vec<DimensionSummary>,
    /// Three highest-scoring dimensions, best first
    pub top_strengths: Vec<Dimension>,
    /// Three lowest-scoring dimensions, weakest first
    pub development_areas: Vec<Dimension>,
    /// Leadership style label from the decision list
    pub style_label: String,
    /// Fixed linear combination of four dimensions
    pub innovation_potential: f32,
}

/// One entry of the style decision list: every `(dimension, threshold)`
/// pair must be strictly exceeded for the label to match.
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub label: &'static str,
    pub requires: &'static [(Dimension, f32)],
}

/// Decision list evaluated top to bottom; first match wins.
pub const STYLE_RULES: [StyleRule; 3] = [
    StyleRule {
        label: "Strategic Leader",
        requires: &[(Dimension::LD, 70.0), (Dimension::CT, 60.0)],
    },
    StyleRule {
        label: "Inspirational Leader",
        requires: &[(Dimension::LD, 70.0), (Dimension::Psy, 70.0)],
    },
    StyleRule {
        label: "Analytical Leader",
        requires: &[(Dimension::CT, 70.0), (Dimension::Cog, 60.0)],
    },
];

/// Label when no style rule matches.
pub const DEFAULT_STYLE_LABEL: &str = "Balanced Leader";

/// Innovation potential coefficients; they sum to 1.0.
pub const INNOVATION_WEIGHTS: [(Dimension, f32); 4] = [
    (Dimension::CT, 0.35),
    (Dimension::Cog, 0.25),
    (Dimension::LD, 0.25),
    (Dimension::Psy, 0.15),
];

fn style_label(scores: &ScoreCard) -> &'static str {
    STYLE_RULES
        .iter()
        .find(|rule| {
            rule.requires
                .iter()
                .all(|&(dim, threshold)| scores.get(dim) > threshold)
        })
        .map_or(DEFAULT_STYLE_LABEL, |rule| rule.label)
}

fn innovation_potential(scores: &ScoreCard) -> f32 {
    INNOVATION_WEIGHTS
        .iter()
        .map(|&(dim, coefficient)| scores.get(dim) * coefficient)
        .sum()
}

/// Build the dashboard for a score card.
///
/// Ranking is a stable descending sort, so equal scores keep the
/// canonical dimension order.
#[must_use]
pub fn dashboard(scores: &ScoreCard, subject: &str) -> Dashboard {
    let dimensions: Vec<DimensionSummary> = scores
        .iter()
        .map(|(dimension, score)| DimensionSummary {
            dimension,
            label: dimension.label().to_string(),
            score,
            level: ScoreLevel::from_score(score),
        })
        .collect();

    let mut ranked: Vec<Dimension> = Dimension::ALL.to_vec();
    ranked.sort_by(|&a, &b| {
        scores
            .get(b)
            .partial_cmp(&scores.get(a))
            .unwrap_or(Ordering::Equal)
    });

    let top_strengths = ranked[..3].to_vec();
    let development_areas: Vec<Dimension> = ranked[ranked.len() - 3..].iter().rev().copied().collect();

    Dashboard {
        subject: subject.to_string(),
        overall_score: scores.mean(),
        dimensions,
        top_strengths,
        development_areas,
        style_label: style_label(scores).to_string(),
        innovation_potential: innovation_potential(scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimension::{Cog, Psy, CT, LD, TR};

    #[test]
    fn first_matching_style_rule_wins() {
        // Satisfies both the Strategic and Inspirational conditions;
        // the earlier rule must win.
        let scores = ScoreCard::from_pairs(&[(LD, 80.0), (CT, 65.0), (Psy, 75.0)]);
        assert_eq!(dashboard(&scores, "t").style_label, "Strategic Leader");
    }

    #[test]
    fn analytical_rule_reachable_without_leadership() {
        let scores = ScoreCard::from_pairs(&[(CT, 75.0), (Cog, 65.0)]);
        assert_eq!(dashboard(&scores, "t").style_label, "Analytical Leader");
    }

    #[test]
    fn default_style_when_no_rule_matches() {
        let scores = ScoreCard::from_pairs(&[(LD, 50.0), (CT, 50.0)]);
        assert_eq!(dashboard(&scores, "t").style_label, DEFAULT_STYLE_LABEL);
    }

    #[test]
    fn innovation_coefficients_sum_to_one() {
        let total: f32 = INNOVATION_WEIGHTS.iter().map(|&(_, c)| c).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn innovation_combination_hand_computed() {
        let scores = ScoreCard::from_pairs(&[
            (CT, 80.0),
            (Cog, 60.0),
            (LD, 40.0),
            (Psy, 20.0),
        ]);
        // 0.35*80 + 0.25*60 + 0.25*40 + 0.15*20 = 56
        let d = dashboard(&scores, "t");
        assert!((d.innovation_potential - 56.0).abs() < 1e-4);
    }

    #[test]
    fn ranking_breaks_ties_by_canonical_order() {
        let scores = ScoreCard::from_pairs(&[
            (Psy, 50.0),
            (CT, 50.0),
            (LD, 50.0),
            (Cog, 50.0),
            (TR, 50.0),
        ]);
        let d = dashboard(&scores, "t");
        assert_eq!(d.top_strengths, [Psy, CT, LD]);
        assert_eq!(d.development_areas, [TR, Cog, LD]);
    }
}
