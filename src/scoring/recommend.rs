//! Canned development recommendations.
//!
//! A fixed priority-ordered trigger list; a dimension emits at most one
//! recommendation, and only when its score falls in the Low bucket.
//! Dimensions outside the list never produce one.

use super::engine::{ScoreCard, ScoreLevel};
use crate::model::Dimension;
use serde::{Deserialize, Serialize};

/// A development recommendation for one low-scoring dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Dimension the recommendation targets
    pub dimension: Dimension,
    /// Priority (1 = highest), from the trigger list order
    pub priority: u8,
    /// Short title
    pub title: String,
    /// One-line description
    pub description: String,
    /// Suggested actions, in order
    pub actions: Vec<String>,
}

struct RecommendationTemplate {
    dimension: Dimension,
    title: &'static str,
    description: &'static str,
    actions: &'static [&'static str],
}

/// Trigger list in priority order. `Cog` is deliberately absent.
const TRIGGERS: [RecommendationTemplate; 4] = [
    RecommendationTemplate {
        dimension: Dimension::LD,
        title: "Develop Leadership Skills",
        description: "Focus on decision-making and team guidance.",
        actions: &["Leadership course", "Find mentor", "Lead small projects"],
    },
    RecommendationTemplate {
        dimension: Dimension::CT,
        title: "Enhance Critical Thinking",
        description: "Improve analysis and decision-making skills.",
        actions: &["Critical thinking books", "Case studies", "Bias training"],
    },
    RecommendationTemplate {
        dimension: Dimension::Psy,
        title: "Build Resilience",
        description: "Enhance stress management and adaptability.",
        actions: &[
            "Mindfulness practice",
            "Emotional intelligence",
            "Stress management",
        ],
    },
    RecommendationTemplate {
        dimension: Dimension::TR,
        title: "Improve Team Collaboration",
        description: "Enhance team role effectiveness.",
        actions: &["Team assessment", "Team-building", "Conflict resolution"],
    },
];

/// Generate recommendations for every Low dimension in the trigger list.
#[must_use]
pub fn recommendations(scores: &ScoreCard) -> Vec<Recommendation> {
    TRIGGERS
        .iter()
        .enumerate()
        .filter(|(_, t)| ScoreLevel::from_score(scores.get(t.dimension)) == ScoreLevel::Low)
        .map(|(rank, t)| Recommendation {
            dimension: t.dimension,
            priority: rank as u8 + 1,
            title: t.title.to_string(),
            description: t.description.to_string(),
            actions: t.actions.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimension::{Cog, Psy, CT, LD, TR};

    #[test]
    fn all_zero_scores_trigger_every_listed_dimension() {
        let recs = recommendations(&ScoreCard::zeroed());
        let dims: Vec<_> = recs.iter().map(|r| r.dimension).collect();
        assert_eq!(dims, [LD, CT, Psy, TR]);
        let priorities: Vec<_> = recs.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, [1, 2, 3, 4]);
    }

    #[test]
    fn cog_never_recommends() {
        // Cog at rock bottom, everything else healthy
        let scores = ScoreCard::from_pairs(&[
            (Psy, 80.0),
            (CT, 80.0),
            (LD, 80.0),
            (Cog, 0.0),
            (TR, 80.0),
        ]);
        assert!(recommendations(&scores).is_empty());
    }

    #[test]
    fn threshold_is_exclusive_at_forty() {
        let scores = ScoreCard::from_pairs(&[
            (Psy, 40.0),
            (CT, 40.0),
            (LD, 39.9),
            (Cog, 40.0),
            (TR, 40.0),
        ]);
        let recs = recommendations(&scores);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].dimension, LD);
        assert_eq!(recs[0].title, "Develop Leadership Skills");
    }
}
