#![no_main]
use libfuzzer_sys::fuzz_target;
use skillscope::model::{Dimension, ResponseSet};
use skillscope::scoring::AssessmentScorer;

/// Fuzz the full scoring pass.
///
/// Feeds arbitrary JSON-decoded response maps to the scorer, including
/// unknown question ids and out-of-range option indices. Scoring must
/// never panic and every score must land in [0, 100].
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(responses) = serde_json::from_str::<ResponseSet>(s) else {
        return;
    };
    let scorer = AssessmentScorer::standard();
    let outcome = scorer.outcome(&responses, "fuzz");
    for dim in Dimension::ALL {
        let score = outcome.scores.get(dim);
        assert!((0.0..=100.0).contains(&score));
    }
    assert!((0.0..=100.0).contains(&outcome.dashboard.overall_score));
});
