//! Criterion benchmarks for funclab_core sampling and analysis
//!
//! Run with: cargo bench -p funclab_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use funclab_core::analysis::analyze;
use funclab_core::model::{
    ComparisonParams, Domain, ExponentialParams, LinearParams, ModelParams, QuadraticParams,
};
use funclab_core::sampler::{sample_scenario, sample_simulator};

fn models() -> Vec<(&'static str, ModelParams)> {
    vec![
        ("linear", ModelParams::Linear(LinearParams::new(2.0, 1.0))),
        (
            "quadratic",
            ModelParams::Quadratic(QuadraticParams::new(1.0, -6.0, 5.0)),
        ),
        (
            "exponential",
            ModelParams::ExponentialGrowthDecay(ExponentialParams::new(1.05, 10.0)),
        ),
        (
            "comparison",
            ModelParams::LinearComparison(ComparisonParams::new(
                LinearParams::new(0.5, 20.0),
                LinearParams::new(0.75, 10.0),
            )),
        ),
    ]
}

fn bench_simulator_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_simulator");
    let domain = Domain::new(-10.0, 10.0, 0.1);

    for (name, model) in models() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &model, |b, model| {
            b.iter(|| sample_simulator(black_box(model), black_box(&domain)))
        });
    }
    group.finish();
}

fn bench_scenario_sampling_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_scenario_points");
    let model = ModelParams::ExponentialGrowthDecay(ExponentialParams::new(0.95, 100.0));

    for points in [50usize, 500, 5_000] {
        let domain = Domain::new(0.0, points as f64 * 0.01, 0.01);
        group.bench_with_input(BenchmarkId::from_parameter(points), &domain, |b, domain| {
            b.iter(|| sample_scenario(black_box(&model), black_box(domain)))
        });
    }
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    c.bench_function("analyze_all_families", |b| {
        let models = models();
        b.iter(|| {
            for (_, model) in &models {
                black_box(analyze(black_box(model)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_simulator_sampling,
    bench_scenario_sampling_by_size,
    bench_analysis
);
criterion_main!(benches);
