use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
    time::Duration,
};

use criterion::{black_box, Criterion};
use knapsack::{solve_bi, solve_tri, Instance, OrderName};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
struct ConfidenceInterval {
    confidence_level: f64,
    #[serde(deserialize_with = "deserialize_nanos", serialize_with = "serialize_nanos")]
    lower_bound: Duration,
    #[serde(deserialize_with = "deserialize_nanos", serialize_with = "serialize_nanos")]
    upper_bound: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct MetricEstimation {
    confidence_interval: ConfidenceInterval,
    #[serde(deserialize_with = "deserialize_nanos", serialize_with = "serialize_nanos")]
    point_estimate: Duration,
    standard_error: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KnapsackBenchResult {
    mean: MetricEstimation,
    median: MetricEstimation,
    std_dev: MetricEstimation,
}

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

fn deserialize_nanos<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let nanos = f64::deserialize(deserializer)?;
    Ok(Duration::from_nanos(nanos.floor() as u64))
}

fn serialize_nanos<S>(nanos: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(nanos.as_nanos() as u64)
}

fn extract_results(path: impl AsRef<Path>) -> Result<KnapsackBenchResult, BenchmarkError> {
    let results_file = File::open(path)?;
    let reader = BufReader::new(results_file);
    let results = serde_json::from_reader(reader)?;
    Ok(results)
}

/// Benchmarks the solver appropriate for `instance`'s objective count,
/// reading criterion's own estimates back off disk the way the teacher's
/// `run_benchmark` does.
pub fn run_benchmark(instance: &Instance, order: OrderName) -> Result<KnapsackBenchResult, BenchmarkError> {
    let mut criterion = Criterion::default().without_plots();
    let bench_name = match instance.nb_objectives() {
        2 => "solve_bi",
        3 => "solve_tri",
        p => panic!("unsupported objective count {p}: only 2 or 3 are supported"),
    };

    criterion.bench_function(bench_name, |b| {
        b.iter(|| match instance.nb_objectives() {
            2 => solve_bi(black_box(instance)).map(|_| ()),
            _ => solve_tri(black_box(instance), order).map(|_| ()),
        })
    });

    let results_path = format!("{}/target/criterion/{bench_name}/new/estimates.json", env!("CARGO_MANIFEST_DIR"));
    extract_results(results_path)
}
