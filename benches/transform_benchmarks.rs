//! Benchmarks for the transform entry points
//! Compares the naive doubling baseline against the validated, safe and batch paths

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use multiplier::config::TransformLimits;
use multiplier::demo::NaiveDoubler;
use multiplier::diagnostics::RecordingDiagnostics;
use multiplier::transform::{BatchRunner, SafeInvoker, ValueTransformer};
use serde_json::{json, Value as JsonValue};
use std::hint::black_box;

fn sample_inputs() -> Vec<JsonValue> {
    vec![json!(5), json!(3.25), json!("Hello"), json!(100), json!(2.5)]
}

fn mixed_batch(size: usize) -> Vec<JsonValue> {
    let pattern = [
        json!(1),
        json!(2.5),
        json!("test"),
        json!(42),
        json!("hello"),
        json!(7.8),
        json!("world"),
        json!(null),
    ];
    pattern.iter().cycle().take(size).cloned().collect()
}

fn transformer() -> ValueTransformer<RecordingDiagnostics> {
    ValueTransformer::new(TransformLimits::default(), RecordingDiagnostics::new())
}

/// Benchmark single-value calls
fn bench_single_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_value");
    let inputs = sample_inputs();
    let naive = NaiveDoubler;
    let invoker = SafeInvoker::new(transformer());
    let transformer = transformer();

    // Baseline: no validation, no structured errors
    group.bench_function("baseline", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(naive.double(black_box(input)));
            }
        });
    });

    group.bench_function("transform", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = black_box(transformer.transform(black_box(input), 2));
            }
        });
    });

    group.bench_function("safe_transform", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(invoker.safe_transform(black_box(input), 2));
            }
        });
    });

    group.finish();
}

/// Benchmark batch processing against per-element calls
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let invoker = SafeInvoker::new(transformer());
    let runner = BatchRunner::new(SafeInvoker::new(transformer()));

    for size in [8, 64, 512] {
        let values = mixed_batch(size);

        group.bench_with_input(BenchmarkId::new("individual", size), &values, |b, values| {
            b.iter(|| {
                let results: Vec<_> = values
                    .iter()
                    .map(|input| invoker.safe_transform(input, 2))
                    .collect();
                black_box(results)
            });
        });

        group.bench_with_input(BenchmarkId::new("batch", size), &values, |b, values| {
            b.iter(|| black_box(runner.batch_transform_slice(values, 2)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_value, bench_batch);
criterion_main!(benches);
