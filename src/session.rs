//! Assessment session as an explicit immutable state machine.
//!
//! State is a value, not ambient globals: the presentation layer holds a
//! [`Session`] and replaces it wholesale through [`Navigator::transition`].
//! Transitions are pure; an event that makes no sense in the current
//! state returns the state unchanged.

use crate::model::ResponseSet;
use crate::scoring::{AssessmentOutcome, AssessmentScorer};

/// Where the respondent currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// Before the assessment has started
    Intro,
    /// Answering questions
    InProgress {
        /// Presentation index of the question on screen
        current: usize,
        /// Answers recorded so far
        responses: ResponseSet,
    },
    /// Finished; outcome computed from the final response snapshot
    Completed {
        responses: ResponseSet,
        outcome: AssessmentOutcome,
    },
}

impl Session {
    /// Fresh session at the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self::Intro
    }

    /// Whether the assessment has finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Responses accumulated so far, if any.
    #[must_use]
    pub fn responses(&self) -> Option<&ResponseSet> {
        match self {
            Self::Intro => None,
            Self::InProgress { responses, .. } | Self::Completed { responses, .. } => {
                Some(responses)
            }
        }
    }

    /// The computed outcome, once completed.
    #[must_use]
    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        match self {
            Self::Completed { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Events the presentation layer can feed into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Begin answering from the first question
    Start,
    /// Record the selected option index for the current question
    Answer(usize),
    /// Advance to the next question; on the last question this finishes
    Next,
    /// Go back one question
    Previous,
    /// Finish now and score whatever has been answered
    Finish,
    /// Throw everything away and return to the intro
    Restart,
}

/// Drives session transitions against a fixed catalog and subject.
#[derive(Debug, Clone)]
pub struct Navigator {
    scorer: AssessmentScorer,
    subject: String,
}

impl Navigator {
    /// Create a navigator for the given scorer and subject name.
    #[must_use]
    pub fn new(scorer: AssessmentScorer, subject: impl Into<String>) -> Self {
        Self {
            scorer,
            subject: subject.into(),
        }
    }

    /// The scorer (and through it, the catalog) in use.
    #[must_use]
    pub fn scorer(&self) -> &AssessmentScorer {
        &self.scorer
    }

    /// Subject name used on the dashboard.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Total number of questions.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.scorer.catalog().len()
    }

    /// Pure transition: consumes the current state and an event, returns
    /// the next state. Invalid (state, event) pairs are no-ops.
    #[must_use]
    pub fn transition(&self, state: Session, event: SessionEvent) -> Session {
        match (state, event) {
            (Session::Intro, SessionEvent::Start) => Session::InProgress {
                current: 0,
                responses: ResponseSet::new(),
            },

            (Session::InProgress { current, responses }, SessionEvent::Answer(index)) => {
                let responses = self.record_answer(current, index, responses);
                Session::InProgress { current, responses }
            }

            (Session::InProgress { current, responses }, SessionEvent::Next) => {
                if current + 1 < self.total_questions() {
                    Session::InProgress {
                        current: current + 1,
                        responses,
                    }
                } else {
                    self.complete(responses)
                }
            }

            (Session::InProgress { current, responses }, SessionEvent::Previous) => {
                Session::InProgress {
                    current: current.saturating_sub(1),
                    responses,
                }
            }

            (Session::InProgress { responses, .. }, SessionEvent::Finish) => {
                self.complete(responses)
            }

            (_, SessionEvent::Restart) => Session::Intro,

            // Anything else is a no-op
            (state, _) => state,
        }
    }

    /// Record an answer for the question at `position`, skipping invalid
    /// positions and out-of-range option indices.
    fn record_answer(
        &self,
        position: usize,
        option_index: usize,
        mut responses: ResponseSet,
    ) -> ResponseSet {
        if let Some(question) = self.scorer.catalog().at(position) {
            if question.option(option_index).is_some() {
                responses.record(question.id, option_index);
            } else {
                tracing::debug!(
                    question = question.id,
                    option_index,
                    "ignoring out-of-range answer"
                );
            }
        }
        responses
    }

    fn complete(&self, responses: ResponseSet) -> Session {
        let outcome = self.scorer.outcome(&responses, &self.subject);
        Session::Completed {
            responses,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        Navigator::new(AssessmentScorer::standard(), "test-subject")
    }

    #[test]
    fn start_enters_first_question() {
        let nav = navigator();
        let state = nav.transition(Session::new(), SessionEvent::Start);
        assert!(matches!(state, Session::InProgress { current: 0, .. }));
    }

    #[test]
    fn answer_records_for_current_question() {
        let nav = navigator();
        let state = nav.transition(Session::new(), SessionEvent::Start);
        let state = nav.transition(state, SessionEvent::Answer(2));
        let responses = state.responses().unwrap();
        assert_eq!(responses.get(1), Some(2));
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let nav = navigator();
        let state = nav.transition(Session::new(), SessionEvent::Start);
        let state = nav.transition(state, SessionEvent::Answer(99));
        assert!(state.responses().unwrap().is_empty());
    }

    #[test]
    fn next_on_last_question_completes() {
        let nav = navigator();
        let mut state = nav.transition(Session::new(), SessionEvent::Start);
        for _ in 0..nav.total_questions() {
            state = nav.transition(state, SessionEvent::Answer(1));
            state = nav.transition(state, SessionEvent::Next);
        }
        assert!(state.is_completed());
        assert_eq!(state.responses().unwrap().len(), 10);
    }

    #[test]
    fn previous_saturates_at_first_question() {
        let nav = navigator();
        let state = nav.transition(Session::new(), SessionEvent::Start);
        let state = nav.transition(state, SessionEvent::Previous);
        assert!(matches!(state, Session::InProgress { current: 0, .. }));
    }

    #[test]
    fn finish_scores_partial_responses() {
        let nav = navigator();
        let state = nav.transition(Session::new(), SessionEvent::Start);
        let state = nav.transition(state, SessionEvent::Answer(1));
        let state = nav.transition(state, SessionEvent::Finish);
        let outcome = state.outcome().unwrap();
        assert_eq!(outcome.dashboard.subject, "test-subject");
    }

    #[test]
    fn invalid_events_are_no_ops() {
        let nav = navigator();
        assert_eq!(
            nav.transition(Session::Intro, SessionEvent::Next),
            Session::Intro
        );
        assert_eq!(
            nav.transition(Session::Intro, SessionEvent::Answer(0)),
            Session::Intro
        );
        assert_eq!(
            nav.transition(Session::Intro, SessionEvent::Finish),
            Session::Intro
        );
    }

    #[test]
    fn restart_returns_to_intro_from_anywhere() {
        let nav = navigator();
        let state = nav.transition(Session::new(), SessionEvent::Start);
        let state = nav.transition(state, SessionEvent::Answer(0));
        let state = nav.transition(state, SessionEvent::Restart);
        assert_eq!(state, Session::Intro);
    }
}
