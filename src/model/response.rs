//! Response sets and response files.

use super::QuestionId;
use crate::error::{ResponseFileErrorKind, SkillscopeError};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selected answers keyed by question id.
///
/// At most one response per question: recording a new selection for an
/// already-answered question replaces the previous one. Entries are never
/// removed except by starting over with a fresh set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: IndexMap<QuestionId, usize>,
}

impl ResponseSet {
    /// Create an empty response set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option index for a question, replacing any
    /// previous selection.
    pub fn record(&mut self, question: QuestionId, option_index: usize) {
        self.answers.insert(question, option_index);
    }

    /// Selected option index for a question, if answered.
    #[must_use]
    pub fn get(&self, question: QuestionId) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    /// Whether the question has been answered.
    #[must_use]
    pub fn contains(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no question has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over (question id, option index) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, usize)> + '_ {
        self.answers.iter().map(|(&q, &i)| (q, i))
    }
}

impl FromIterator<(QuestionId, usize)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, usize)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// On-disk shape of a saved response file.
///
/// ```json
/// { "subject": "jane", "answers": { "1": 0, "2": 3 } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ResponseDocument {
    /// Optional subject name the responses belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Selected option indices keyed by question id
    pub answers: ResponseSet,
}

/// Load a response document from a JSON file.
pub fn load_responses(path: &Path) -> Result<ResponseDocument, SkillscopeError> {
    let content = std::fs::read_to_string(path).map_err(|e| SkillscopeError::ResponseFile {
        path: path.to_path_buf(),
        source: ResponseFileErrorKind::Io(e),
    })?;

    serde_json::from_str(&content).map_err(|e| SkillscopeError::ResponseFile {
        path: path.to_path_buf(),
        source: ResponseFileErrorKind::InvalidJson(e),
    })
}
