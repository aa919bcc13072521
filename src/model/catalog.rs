//! The built-in question catalog.
//!
//! Ten fixed scenario questions. Question order, option order and the
//! weight tables are all part of the scoring contract and must not be
//! reordered.

use super::Dimension::{self, Cog, Psy, CT, LD, TR};
use super::{AnswerOption, Question, QuestionCategory, QuestionId};

/// The ordered set of questions presented by the assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

fn opt(text: &str, weights: &[(Dimension, i8)]) -> AnswerOption {
    AnswerOption::new(text, weights)
}

impl QuestionCatalog {
    /// Build a catalog from an ordered question list.
    ///
    /// Presentation order is the list order; ids must be unique.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The standard ten-question leadership scenario set.
    #[must_use]
    pub fn standard() -> Self {
        let questions = vec![
            Question {
                id: 1,
                prompt: "You're the young founder of an AI startup. After 6 months of launch, \
                         a major competitor copies your product and offers it at 50% lower \
                         price. Your team is demotivated. What do you do?"
                    .into(),
                category: QuestionCategory::SituationalJudgment,
                options: vec![
                    opt(
                        "Rush to develop unique features and lower prices",
                        &[(Psy, -2), (LD, 2), (CT, 1)],
                    ),
                    opt(
                        "Host brainstorming session for creative solutions",
                        &[(LD, 3), (TR, 3), (Cog, 2)],
                    ),
                    opt(
                        "Focus on different customer segment",
                        &[(CT, 3), (LD, 2), (Psy, 2)],
                    ),
                    opt("Seek strategic partnership", &[(TR, 3), (LD, 2), (CT, 2)]),
                ],
            },
            Question {
                id: 2,
                prompt: "An investor asks you to completely change your business model for \
                         funding. This conflicts with your core vision. How do you handle this?"
                    .into(),
                category: QuestionCategory::EthicalDilemma,
                options: vec![
                    opt(
                        "Reject the offer and maintain your vision",
                        &[(Psy, 3), (LD, 2), (CT, -1)],
                    ),
                    opt(
                        "Accept with minor adjustments",
                        &[(TR, 2), (LD, 1), (Psy, 1)],
                    ),
                    opt(
                        "Negotiate to find middle ground",
                        &[(LD, 3), (CT, 2), (TR, 2)],
                    ),
                    opt(
                        "Request time to consult mentors",
                        &[(CT, 3), (Psy, 2), (Cog, 1)],
                    ),
                ],
            },
            Question {
                id: 3,
                prompt: "Your top performer is highly productive but creates team conflicts. \
                         Do you prioritize results or team harmony?"
                    .into(),
                category: QuestionCategory::LeadershipDilemma,
                options: vec![
                    opt(
                        "Focus on results and manage conflicts separately",
                        &[(LD, 2), (Psy, -1), (TR, -2)],
                    ),
                    opt(
                        "Coach the employee on teamwork",
                        &[(LD, 3), (Psy, 2), (TR, 3)],
                    ),
                    opt(
                        "Reassign to individual contributor role",
                        &[(TR, 2), (LD, 1), (CT, 1)],
                    ),
                    opt(
                        "Implement team-building activities",
                        &[(TR, 3), (LD, 2), (Psy, 2)],
                    ),
                ],
            },
            Question {
                id: 4,
                prompt: "As a manager, you need to lead digital transformation. 60% of \
                         employees resist change. What's your strategy?"
                    .into(),
                category: QuestionCategory::ChangeManagement,
                options: vec![
                    opt(
                        "Enforce change gradually with training",
                        &[(LD, 2), (Psy, -1), (TR, 1)],
                    ),
                    opt(
                        "Identify 'change champions' as ambassadors",
                        &[(TR, 3), (LD, 3), (Psy, 2)],
                    ),
                    opt(
                        "Start with small pilot project",
                        &[(CT, 3), (LD, 2), (Cog, 1)],
                    ),
                    opt(
                        "Redesign incentives for adoption",
                        &[(LD, 3), (Psy, 2), (CT, 2)],
                    ),
                ],
            },
            Question {
                id: 5,
                prompt: "AI implementation will replace 30% of manual jobs. How do you lead \
                         this transition ethically?"
                    .into(),
                category: QuestionCategory::EthicalLeadership,
                options: vec![
                    opt(
                        "Implement quickly with severance packages",
                        &[(LD, 1), (Psy, -3), (CT, 1)],
                    ),
                    opt(
                        "Create upskilling programs",
                        &[(LD, 4), (TR, 3), (Psy, 3)],
                    ),
                    opt(
                        "Slow implementation and seek alternatives",
                        &[(CT, 2), (LD, 2), (TR, 2)],
                    ),
                    opt(
                        "Form employee committee to co-design",
                        &[(TR, 4), (LD, 3), (CT, 3)],
                    ),
                ],
            },
            Question {
                id: 6,
                prompt: "Market research shows your product is becoming obsolete. Do you \
                         invest in improvements or innovation?"
                    .into(),
                category: QuestionCategory::StrategicDecision,
                options: vec![
                    opt(
                        "Focus on improving existing features",
                        &[(CT, 2), (LD, 1), (Psy, -1)],
                    ),
                    opt(
                        "Allocate resources for breakthrough innovation",
                        &[(LD, 3), (CT, 3), (Cog, 2)],
                    ),
                    opt(
                        "Pursue both paths with separate teams",
                        &[(TR, 3), (LD, 2), (CT, 2)],
                    ),
                    opt("Acquire innovative startup", &[(CT, 3), (LD, 2), (TR, 1)]),
                ],
            },
            Question {
                id: 7,
                prompt: "Major data breach exposes customer information. Media is calling. \
                         What's your first response?"
                    .into(),
                category: QuestionCategory::CrisisManagement,
                options: vec![
                    opt(
                        "Issue immediate public apology",
                        &[(LD, 3), (CT, 2), (Psy, 2)],
                    ),
                    opt(
                        "First contain breach, then communicate",
                        &[(CT, 3), (LD, 2), (Cog, 2)],
                    ),
                    opt("Blame technical issues", &[(LD, -3), (Psy, -2), (CT, -1)]),
                    opt(
                        "Activate crisis team protocol",
                        &[(LD, 4), (CT, 3), (TR, 3)],
                    ),
                ],
            },
            Question {
                id: 8,
                prompt: "Expanding to new international market, you discover cultural \
                         practices conflicting with company values. How do you proceed?"
                    .into(),
                category: QuestionCategory::CrossCultural,
                options: vec![
                    opt(
                        "Adapt company practices to local culture",
                        &[(TR, 2), (LD, 1), (Psy, 1)],
                    ),
                    opt(
                        "Maintain company values and educate",
                        &[(LD, 3), (CT, 2), (Psy, 2)],
                    ),
                    opt(
                        "Find compromise respecting both",
                        &[(CT, 3), (LD, 3), (TR, 2)],
                    ),
                    opt("Reconsider market entry", &[(CT, 4), (LD, 2), (Psy, 3)]),
                ],
            },
            Question {
                id: 9,
                prompt: "New technology could transform your industry in 5 years. Do you \
                         invest now or wait?"
                    .into(),
                category: QuestionCategory::FutureStrategy,
                options: vec![
                    opt(
                        "Heavy investment to become early leader",
                        &[(LD, 3), (CT, 2), (Psy, 1)],
                    ),
                    opt(
                        "Wait for clear ROI and proven use cases",
                        &[(CT, 3), (LD, 1), (Psy, 2)],
                    ),
                    opt(
                        "Form strategic partnerships to share risk",
                        &[(TR, 3), (LD, 2), (CT, 2)],
                    ),
                    opt(
                        "Create innovation lab for experimentation",
                        &[(Cog, 3), (LD, 2), (CT, 3)],
                    ),
                ],
            },
            Question {
                id: 10,
                prompt: "Your company is accused of greenwashing. Environmental groups are \
                         protesting. How do you restore trust?"
                    .into(),
                category: QuestionCategory::ReputationManagement,
                options: vec![
                    opt("Issue strong denial", &[(LD, -2), (CT, -1), (Psy, -3)]),
                    opt(
                        "Admit shortcomings and present plan",
                        &[(LD, 4), (CT, 3), (Psy, 3)],
                    ),
                    opt(
                        "Hire PR firm to manage narrative",
                        &[(CT, 1), (LD, 1), (TR, 1)],
                    ),
                    opt(
                        "Engage with protesters co-create goals",
                        &[(TR, 4), (LD, 3), (CT, 3)],
                    ),
                ],
            },
        ];

        Self { questions }
    }

    /// Number of questions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Question at a presentation position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
