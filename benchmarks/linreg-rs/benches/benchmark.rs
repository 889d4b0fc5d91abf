//! Linear regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K points) for both fitting methods
//! - Gradient descent step size and iteration budget
//! - Pathological cases (outliers, clustered x-values, high noise)
//! - CSV ingestion
//! - Batch prediction
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linreg_rs::prelude::*;
use linreg_rs_benchmarks::{
    generate_clustered_data, generate_high_noise_data, generate_linear_data,
    generate_outlier_data, generate_random_x_data, to_csv,
};
use std::hint::black_box;

// ============================================================================
// Helpers
// ============================================================================

fn train(data: &Dataset<f64>, method: FittingMethod<f64>) -> RegressionSession<f64> {
    let mut session = RegressionSession::with_dataset(data.clone());
    session.select(method).unwrap();
    session.train_model().unwrap();
    session
}

fn gradient_descent(learning_rate: f64, max_iterations: usize) -> FittingMethod<f64> {
    GradientDescent::<f64>::new()
        .learning_rate(learning_rate)
        .max_iterations(max_iterations)
        .build()
        .unwrap()
        .into()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let data = generate_linear_data(size, 42);

        group.bench_with_input(BenchmarkId::new("least_squares", size), &size, |b, _| {
            b.iter(|| {
                let mut model = RegressionModel::least_squares();
                model.train(black_box(&data)).unwrap();
                model
            })
        });

        let config = GradientDescent::<f64>::new().max_iterations(100).build().unwrap();
        group.bench_with_input(BenchmarkId::new("gradient_descent", size), &size, |b, _| {
            b.iter(|| {
                let mut model = RegressionModel::gradient_descent(config);
                model.train(black_box(&data)).unwrap();
                model
            })
        });
    }
    group.finish();
}

fn bench_learning_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("learning_rate");
    group.sample_size(30);

    let data = generate_random_x_data(1_000, 42);

    for lr in [0.001, 0.005, 0.01, 0.02] {
        group.bench_with_input(BenchmarkId::new("gradient_descent", lr), &lr, |b, &lr| {
            b.iter(|| train(black_box(&data), gradient_descent(lr, 10_000)))
        });
    }
    group.finish();
}

fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterations");
    group.sample_size(30);

    let data = generate_linear_data(1_000, 42);

    for budget in [10, 100, 1_000, 5_000] {
        group.bench_with_input(
            BenchmarkId::new("gradient_descent", budget),
            &budget,
            |b, &budget| b.iter(|| train(black_box(&data), gradient_descent(0.01, budget))),
        );
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(50);

    let size = 10_000;
    let cases = [
        ("outliers", generate_outlier_data(size, 42)),
        ("clustered", generate_clustered_data(size, 42)),
        ("high_noise", generate_high_noise_data(size, 42)),
    ];

    for (name, data) in &cases {
        group.bench_function(BenchmarkId::new("least_squares", name), |b| {
            b.iter(|| train(black_box(data), FittingMethod::LeastSquares))
        });
        group.bench_function(BenchmarkId::new("gradient_descent", name), |b| {
            b.iter(|| train(black_box(data), gradient_descent(0.01, 1_000)))
        });
    }
    group.finish();
}

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");
    group.sample_size(30);

    for size in [1_000, 10_000, 100_000] {
        let text = to_csv(&generate_random_x_data(size, 7));
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("csv", size), &size, |b, _| {
            b.iter(|| {
                let mut data = Dataset::<f64>::new();
                data.ingest_str(black_box(&text)).unwrap();
                data
            })
        });
    }
    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");
    group.sample_size(100);

    let session = train(&generate_linear_data(1_000, 42), FittingMethod::LeastSquares);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let xs: Vec<f64> = (0..size).map(|i| i as f64 * 0.01).collect();

        group.bench_with_input(BenchmarkId::new("predict_many", size), &size, |b, _| {
            b.iter(|| session.predict_many(black_box(&xs)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_learning_rate,
    bench_iterations,
    bench_pathological,
    bench_ingestion,
    bench_prediction,
);

criterion_main!(benches);
