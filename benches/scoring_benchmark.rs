//! Benchmarks for the scoring pass.

use criterion::{criterion_group, criterion_main, Criterion};
use skillscope::model::ResponseSet;
use skillscope::scoring::AssessmentScorer;
use std::hint::black_box;

fn benchmark_full_scoring_pass(c: &mut Criterion) {
    let scorer = AssessmentScorer::standard();
    let responses: ResponseSet = (1..=10).map(|id| (id, (id as usize) % 4)).collect();

    c.bench_function("score_full_response_set", |b| {
        b.iter(|| black_box(scorer.score(black_box(&responses))))
    });

    c.bench_function("outcome_full_response_set", |b| {
        b.iter(|| black_box(scorer.outcome(black_box(&responses), "bench")))
    });
}

criterion_group!(benches, benchmark_full_scoring_pass);
criterion_main!(benches);
