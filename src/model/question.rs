//! Question and answer-option types.

use super::Dimension;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a question within the catalog.
pub type QuestionId = u32;

/// Scenario category a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum QuestionCategory {
    SituationalJudgment,
    EthicalDilemma,
    LeadershipDilemma,
    ChangeManagement,
    EthicalLeadership,
    StrategicDecision,
    CrisisManagement,
    CrossCultural,
    FutureStrategy,
    ReputationManagement,
}

impl QuestionCategory {
    /// Human-readable name for display.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SituationalJudgment => "Situational Judgment",
            Self::EthicalDilemma => "Ethical Dilemma",
            Self::LeadershipDilemma => "Leadership Dilemma",
            Self::ChangeManagement => "Change Management",
            Self::EthicalLeadership => "Ethical Leadership",
            Self::StrategicDecision => "Strategic Decision",
            Self::CrisisManagement => "Crisis Management",
            Self::CrossCultural => "Cross-Cultural",
            Self::FutureStrategy => "Future Strategy",
            Self::ReputationManagement => "Reputation Management",
        }
    }
}

/// One selectable answer for a question.
///
/// The weight map records how choosing this option contributes to each
/// dimension's raw score. Weights are small signed integers; the catalog
/// keeps them within the normalization bounds used by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerOption {
    /// Display text shown to the respondent
    pub text: String,
    /// Per-dimension weight contributions, in declaration order
    pub weights: IndexMap<Dimension, i8>,
}

impl AnswerOption {
    /// Build an option from display text and (dimension, weight) pairs.
    #[must_use]
    pub fn new(text: impl Into<String>, weights: &[(Dimension, i8)]) -> Self {
        Self {
            text: text.into(),
            weights: weights.iter().copied().collect(),
        }
    }
}

/// A single scenario question with its ordered answer options.
///
/// Option order is part of the contract: responses reference options by
/// index, and the weight tables assume index-stable options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Question {
    /// Stable identifier, unique within the catalog
    pub id: QuestionId,
    /// Scenario prompt shown to the respondent
    pub prompt: String,
    /// Scenario category tag
    pub category: QuestionCategory,
    /// Ordered answer options (3-4 per question)
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Look up an option by index.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lookup_respects_bounds() {
        let q = Question {
            id: 1,
            prompt: "prompt".into(),
            category: QuestionCategory::SituationalJudgment,
            options: vec![AnswerOption::new("a", &[(Dimension::LD, 2)])],
        };
        assert!(q.option(0).is_some());
        assert!(q.option(1).is_none());
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionCategory::CrisisManagement).unwrap();
        assert_eq!(json, "\"crisis_management\"");
    }
}
