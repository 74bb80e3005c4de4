//! Human-readable demo and comparison output

use super::baseline::NaiveDoubler;
use super::measure::{measure, Measurement};
use crate::app::AppConfig;
use crate::value::{preview, truncate_chars};
use serde_json::{json, Value as JsonValue};
use std::time::Instant;
use tracing::debug;

fn sample_calls() -> Vec<(JsonValue, i64)> {
    vec![
        (json!(5), 2),
        (json!(3.25), 3),
        (json!("Hello"), 2),
        (json!([1, 2, 3]), 2),
        (json!(10), -1),
    ]
}

fn timing_inputs() -> Vec<JsonValue> {
    vec![json!(5), json!(3.25), json!("Hello"), json!(100), json!(2.5)]
}

fn batch_inputs() -> JsonValue {
    json!([1, 2.5, "test", 42, "hello", 7.8, "world", 999])
}

fn problematic_inputs() -> Vec<(JsonValue, &'static str)> {
    vec![
        (json!(null), "Null value"),
        (json!([1, 2, 3]), "List input"),
        (json!({}), "Map input"),
        (json!(5), "Normal integer"),
        (json!("test"), "Normal text"),
        (json!(100_000_000_000_000_000_000_u128), "Very large integer"),
        (json!("a".repeat(1000)), "Long text"),
    ]
}

/// Walk through direct, safe and batch calls on fixed sample inputs
pub fn run_demo(config: &AppConfig) {
    let transformer = config.transformer();
    let invoker = config.safe_invoker();
    let runner = config.batch_runner();
    let limit = config.limits.preview_length;

    println!("=== Transform Examples ===");

    println!("\n1. Direct calls:");
    for (input, factor) in sample_calls() {
        match transformer.transform(&input, factor) {
            Ok(value) => println!("transform({input}, {factor}) = {value}"),
            Err(e) => println!("transform({input}, {factor}) -> Error: {e}"),
        }
    }

    println!("\n2. Safe calls (never fail):");
    for (input, factor) in sample_calls() {
        let result = invoker.safe_transform(&input, factor);
        println!("safe_transform({input}, {factor}) = {}", result.summary());
    }

    println!("\n3. Batch processing:");
    let values = json!([1, 2.5, "test", 42, "hello"]);
    match runner.batch_transform(&values, 3) {
        Ok(results) => {
            for (i, (input, result)) in values
                .as_array()
                .into_iter()
                .flatten()
                .zip(&results)
                .enumerate()
            {
                println!(
                    "batch[{i}]: {} -> {}",
                    preview(input, limit),
                    result.summary()
                );
            }
        }
        Err(e) => println!("batch -> Error: {e}"),
    }
}

fn print_measurement(label: &str, measurement: &Measurement) {
    println!("{label}");
    println!(
        "   Execution time: {:.4}s",
        measurement.elapsed.as_secs_f64()
    );
    println!(
        "   Average per call: {:.9}s",
        measurement.average_per_call().as_secs_f64()
    );
    println!("   Successful calls: {}", measurement.successes);
    println!("   Errors: {}", measurement.errors);
}

/// Time the naive baseline against the validated entry points
pub fn run_comparison(config: &AppConfig, iterations: usize) {
    let naive = NaiveDoubler;
    let transformer = config.transformer();
    let invoker = config.safe_invoker();
    let runner = config.batch_runner();
    let inputs = timing_inputs();

    debug!(
        "Running comparison over {} inputs x {} iterations",
        inputs.len(),
        iterations
    );

    println!("=== Performance Comparison: Baseline vs Validated ===\n");

    let baseline = measure(&inputs, iterations, |input| {
        Ok::<_, ()>(naive.double(input))
    });
    print_measurement("1. Baseline (naive doubling):", &baseline);

    let validated = measure(&inputs, iterations, |input| transformer.transform(input, 2));
    print_measurement("\n2. transform:", &validated);

    let safe = measure(&inputs, iterations, |input| {
        Ok::<_, ()>(invoker.safe_transform(input, 2))
    });
    print_measurement("\n3. safe_transform:", &safe);

    println!("\n=== Relative Speed ===");
    match validated.speedup_over(&baseline) {
        Some(ratio) => println!("transform vs baseline: {ratio:.2}x"),
        None => println!("transform vs baseline: too fast to compare"),
    }
    match safe.speedup_over(&baseline) {
        Some(ratio) => println!("safe_transform vs baseline: {ratio:.2}x"),
        None => println!("safe_transform vs baseline: too fast to compare"),
    }

    println!("\n4. Batch processing:");
    let values = batch_inputs();
    let items = values.as_array().cloned().unwrap_or_default();

    let start = Instant::now();
    let individual: Vec<_> = items
        .iter()
        .map(|input| transformer.transform(input, 2))
        .collect();
    let individual_time = start.elapsed();

    let start = Instant::now();
    let batched = runner.batch_transform_slice(&items, 2);
    let batch_time = start.elapsed();

    println!(
        "   Individual processing: {:.6}s ({} values)",
        individual_time.as_secs_f64(),
        individual.len()
    );
    println!(
        "   Batch processing: {:.6}s ({} values)",
        batch_time.as_secs_f64(),
        batched.len()
    );
    if !batch_time.is_zero() {
        println!(
            "   Batch vs individual: {:.2}x",
            individual_time.as_secs_f64() / batch_time.as_secs_f64()
        );
    }

    demonstrate_error_handling(config);
}

fn demonstrate_error_handling(config: &AppConfig) {
    let naive = NaiveDoubler;
    let transformer = config.transformer();
    let invoker = config.safe_invoker();
    let limit = config.limits.preview_length;

    println!("\n=== Error Handling Demonstration ===");

    println!("\n1. Baseline:");
    for (input, description) in problematic_inputs() {
        match naive.double(&input) {
            Some(output) => println!("   {description}: {}", preview(&output, limit)),
            None => println!("   {description}: None"),
        }
    }

    println!("\n2. transform:");
    for (input, description) in problematic_inputs() {
        match transformer.transform(&input, 2) {
            Ok(value) => println!(
                "   {description}: {}",
                truncate_chars(&value.to_string(), limit)
            ),
            Err(e) => println!("   {description}: Error - {e}"),
        }
    }

    println!("\n3. safe_transform (never fails):");
    for (input, description) in problematic_inputs() {
        let result = invoker.safe_transform(&input, 2);
        if result.succeeded() {
            println!(
                "   {description}: Success - {}",
                truncate_chars(&result.summary(), limit)
            );
        } else {
            println!("   {description}: {}", result.summary());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_inputs_cover_failure_paths() {
        let config = AppConfig::default();
        let invoker = config.safe_invoker();
        let failures = sample_calls()
            .iter()
            .filter(|(input, factor)| !invoker.safe_transform(input, *factor).succeeded())
            .count();
        assert_eq!(failures, 2);
    }

    #[test]
    fn test_timing_inputs_all_succeed() {
        let transformer = AppConfig::default().transformer();
        assert!(timing_inputs()
            .iter()
            .all(|input| transformer.transform(input, 2).is_ok()));
    }
}
