//! Integration tests for the headless `score` command handler.

use skillscope::cli::{run_score, ScoreConfig};
use skillscope::reports::ReportFormat;
use std::path::PathBuf;

fn config(responses_path: PathBuf, output_file: Option<PathBuf>) -> ScoreConfig {
    ScoreConfig {
        responses_path,
        subject: None,
        output: ReportFormat::Summary,
        output_file,
        min_overall: None,
        no_actions: false,
        no_color: true,
        quiet: true,
    }
}

#[test]
fn scores_a_saved_response_file() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.json");
    let report = dir.path().join("report.txt");
    std::fs::write(
        &answers,
        r#"{"subject": "jane", "answers": {"1": 1, "2": 2, "3": 1}}"#,
    )
    .unwrap();

    let code = run_score(config(answers, Some(report.clone()))).unwrap();
    assert_eq!(code, 0);

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("Subject:  jane"));
    assert!(content.contains("Leadership"));
}

#[test]
fn subject_override_beats_file_subject() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.json");
    let report = dir.path().join("report.md");
    std::fs::write(&answers, r#"{"subject": "jane", "answers": {"1": 0}}"#).unwrap();

    let mut cfg = config(answers, Some(report.clone()));
    cfg.subject = Some("morgan".to_string());
    cfg.output = ReportFormat::Markdown;
    run_score(cfg).unwrap();

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("morgan"));
    assert!(!content.contains("jane"));
}

#[test]
fn empty_answers_fail_a_threshold_gate() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.json");
    let report = dir.path().join("report.txt");
    std::fs::write(&answers, r#"{"answers": {}}"#).unwrap();

    let mut cfg = config(answers, Some(report));
    cfg.min_overall = Some(40.0);
    let code = run_score(cfg).unwrap();
    assert_eq!(code, 1);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path().join("nope.json"), None);
    assert!(run_score(cfg).is_err());
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.json");
    std::fs::write(&answers, "{not json").unwrap();
    assert!(run_score(config(answers, None)).is_err());
}
