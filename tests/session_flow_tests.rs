//! End-to-end flow: session transitions into a completed outcome, then
//! report generation over it.

use skillscope::reports::{render, ReportConfig, ReportFormat};
use skillscope::scoring::AssessmentScorer;
use skillscope::session::{Navigator, Session, SessionEvent};

fn navigator() -> Navigator {
    Navigator::new(AssessmentScorer::standard(), "jane")
}

/// Walk a session through every question, picking the given option.
fn complete_with_option(nav: &Navigator, option: usize) -> Session {
    let mut state = nav.transition(Session::new(), SessionEvent::Start);
    for _ in 0..nav.total_questions() {
        state = nav.transition(state, SessionEvent::Answer(option));
        state = nav.transition(state, SessionEvent::Next);
    }
    state
}

#[test]
fn full_walkthrough_produces_an_outcome() {
    let nav = navigator();
    let state = complete_with_option(&nav, 1);

    assert!(state.is_completed());
    let outcome = state.outcome().expect("completed session has an outcome");
    assert_eq!(outcome.dashboard.subject, "jane");
    assert_eq!(state.responses().unwrap().len(), 10);
}

#[test]
fn revisiting_a_question_keeps_a_single_response() {
    let nav = navigator();
    let mut state = nav.transition(Session::new(), SessionEvent::Start);
    state = nav.transition(state, SessionEvent::Answer(0));
    state = nav.transition(state, SessionEvent::Next);
    state = nav.transition(state, SessionEvent::Previous);
    state = nav.transition(state, SessionEvent::Answer(2));
    state = nav.transition(state, SessionEvent::Finish);

    let responses = state.responses().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses.get(1), Some(2));
}

#[test]
fn restart_discards_everything() {
    let nav = navigator();
    let state = complete_with_option(&nav, 1);
    let state = nav.transition(state, SessionEvent::Restart);
    assert_eq!(state, Session::Intro);
    assert!(state.responses().is_none());
}

// ============================================================================
// Reports over a completed session
// ============================================================================

#[test]
fn every_textual_format_renders() {
    let nav = navigator();
    let state = complete_with_option(&nav, 1);
    let outcome = state.outcome().unwrap();
    let config = ReportConfig::default();

    for format in [
        ReportFormat::Summary,
        ReportFormat::Json,
        ReportFormat::Markdown,
    ] {
        let report = render(outcome, format, &config, false).unwrap();
        assert!(report.contains("jane"), "{format} report misses subject");
    }
}

#[test]
fn interactive_formats_are_rejected_by_render() {
    let nav = navigator();
    let state = complete_with_option(&nav, 1);
    let outcome = state.outcome().unwrap();
    let config = ReportConfig::default();

    assert!(render(outcome, ReportFormat::Tui, &config, false).is_err());
    assert!(render(outcome, ReportFormat::Auto, &config, false).is_err());
}

#[test]
fn json_report_round_trips_the_outcome() {
    let nav = navigator();
    let state = complete_with_option(&nav, 2);
    let outcome = state.outcome().unwrap();

    let report = render(outcome, ReportFormat::Json, &ReportConfig::default(), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    let reparsed: skillscope::scoring::AssessmentOutcome =
        serde_json::from_value(value["report"].clone()).unwrap();
    assert_eq!(&reparsed, outcome);
}
