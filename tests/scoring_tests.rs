//! Integration tests for the scoring pass: tally, normalization and
//! cross-dimension adjustment over the standard catalog.

use skillscope::model::{AnswerOption, Dimension, Question, QuestionCatalog, QuestionCategory, ResponseSet};
use skillscope::scoring::{
    apply_adjustments, normalize, tally, AssessmentScorer, ScoreCard, W_MAX,
};
use skillscope::Dimension::{Cog, Psy, CT, LD, TR};

const EPS: f32 = 1e-3;

fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}

// ============================================================================
// Literal weight vectors from question 1
// ============================================================================

#[test]
fn question_one_option_zero_hand_computed() {
    // Weights {Psy: -2, LD: 2, CT: 1}; single answer, bounds 4/-3 per answer
    let scorer = AssessmentScorer::standard();
    let responses: ResponseSet = [(1, 0)].into_iter().collect();
    let scores = scorer.score(&responses);

    assert_close(scores.get(Psy), 100.0 / 7.0, "Psy");
    assert_close(scores.get(LD), 500.0 / 7.0, "LD");
    assert_close(scores.get(CT), 400.0 / 7.0, "CT");
    assert_eq!(scores.get(Cog), 0.0);
    assert_eq!(scores.get(TR), 0.0);
}

#[test]
fn question_one_option_one_boosts_through_rules() {
    // Weights {LD: 3, TR: 3, Cog: 2} normalize to LD/TR 85.71, Cog 71.43.
    // LD > 70 lifts TR by 1.1; nothing else fires.
    let scorer = AssessmentScorer::standard();
    let responses: ResponseSet = [(1, 1)].into_iter().collect();
    let scores = scorer.score(&responses);

    assert_close(scores.get(LD), 600.0 / 7.0, "LD");
    assert_close(scores.get(TR), 600.0 / 7.0 * 1.1, "TR");
    assert_close(scores.get(Cog), 500.0 / 7.0, "Cog");
    assert_eq!(scores.get(Psy), 0.0);
    assert_eq!(scores.get(CT), 0.0);
}

#[test]
fn question_one_remaining_options_hand_computed() {
    let scorer = AssessmentScorer::standard();

    // Option 2: {CT: 3, LD: 2, Psy: 2}
    let scores = scorer.score(&[(1, 2)].into_iter().collect());
    assert_close(scores.get(CT), 600.0 / 7.0, "CT");
    assert_close(scores.get(LD), 500.0 / 7.0, "LD");
    assert_close(scores.get(Psy), 500.0 / 7.0, "Psy");

    // Option 3: {TR: 3, LD: 2, CT: 2}; LD > 70 boosts TR
    let scores = scorer.score(&[(1, 3)].into_iter().collect());
    assert_close(scores.get(TR), 600.0 / 7.0 * 1.1, "TR");
    assert_close(scores.get(LD), 500.0 / 7.0, "LD");
    assert_close(scores.get(CT), 500.0 / 7.0, "CT");
}

// ============================================================================
// Malformed responses are skipped, never errors
// ============================================================================

#[test]
fn unknown_question_ids_are_skipped() {
    let scorer = AssessmentScorer::standard();
    let responses: ResponseSet = [(99, 0), (500, 2)].into_iter().collect();
    let scores = scorer.score(&responses);
    for dim in Dimension::ALL {
        assert_eq!(scores.get(dim), 0.0, "{dim} should be untouched");
    }
}

#[test]
fn out_of_range_option_index_is_skipped() {
    let scorer = AssessmentScorer::standard();
    let with_garbage: ResponseSet = [(1, 1), (2, 77)].into_iter().collect();
    let without: ResponseSet = [(1, 1)].into_iter().collect();
    assert_eq!(scorer.score(&with_garbage), scorer.score(&without));
}

// ============================================================================
// Purity and order-insensitivity
// ============================================================================

#[test]
fn scoring_is_deterministic() {
    let scorer = AssessmentScorer::standard();
    let responses: ResponseSet = [(1, 1), (4, 2), (7, 3)].into_iter().collect();
    assert_eq!(scorer.score(&responses), scorer.score(&responses));
}

#[test]
fn insertion_order_does_not_matter() {
    let scorer = AssessmentScorer::standard();
    let forward: ResponseSet = [(1, 1), (2, 2), (3, 3)].into_iter().collect();
    let reverse: ResponseSet = [(3, 3), (2, 2), (1, 1)].into_iter().collect();
    assert_eq!(scorer.score(&forward), scorer.score(&reverse));
}

// ============================================================================
// Normalization extremes
// ============================================================================

/// A catalog where one option per question carries the maximum weight for
/// LD, so an all-max strategy reaches exactly 100 before adjustment.
fn max_ld_catalog() -> QuestionCatalog {
    let questions = (1..=4)
        .map(|id| Question {
            id,
            prompt: format!("scenario {id}"),
            category: QuestionCategory::SituationalJudgment,
            options: vec![
                AnswerOption::new("steady", &[(LD, 1), (CT, 1)]),
                AnswerOption::new("bold", &[(LD, W_MAX as i8)]),
                AnswerOption::new("cautious", &[(CT, 2), (Psy, 1)]),
            ],
        })
        .collect();
    QuestionCatalog::new(questions)
}

#[test]
fn all_max_answers_normalize_to_one_hundred_before_adjustment() {
    let catalog = max_ld_catalog();
    let responses: ResponseSet = (1..=4).map(|id| (id, 1)).collect();

    let normalized = normalize(&tally(&catalog, &responses));
    assert_eq!(normalized.get(LD), 100.0);

    // Adjustment never pushes past the clamp either
    let scorer = AssessmentScorer::new(catalog);
    let adjusted = scorer.score(&responses);
    assert_eq!(adjusted.get(LD), 100.0);
}

#[test]
fn untouched_dimension_is_exactly_zero() {
    let catalog = max_ld_catalog();
    let responses: ResponseSet = (1..=4).map(|id| (id, 1)).collect();
    let scores = AssessmentScorer::new(catalog).score(&responses);
    // Option 1 never mentions TR or Cog
    assert_eq!(scores.get(Cog), 0.0);
    // TR is only reachable through the LD adjustment rule, which scales 0
    assert_eq!(scores.get(TR), 0.0);
}

// ============================================================================
// Adjustment sequencing over full-catalog scores
// ============================================================================

#[test]
fn adjustment_sequence_matches_manual_application() {
    // Build a card where rule 1's boost creates rule 2's trigger, then
    // verify apply_adjustments agrees with a by-hand sequential pass.
    let mut scores = ScoreCard::from_pairs(&[(LD, 72.0), (TR, 66.0), (Psy, 50.0)]);
    apply_adjustments(&mut scores);

    let tr_after_rule_1 = 66.0_f32 * 1.1; // 72.6 > 70, so rule 2 fires
    assert!((scores.get(TR) - tr_after_rule_1).abs() < EPS);
    assert!((scores.get(Psy) - 50.0 * 1.05).abs() < EPS);
}
