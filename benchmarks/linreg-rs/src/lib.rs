//! Reproducible data generators shared by the linear regression benchmarks.
//!
//! Every generator is seeded, so repeated runs measure the same inputs.

use linreg_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::fmt::Write;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate evenly spaced samples on `y = 2.5x + 4` with Gaussian noise.
pub fn generate_linear_data(size: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.5 * xi + 4.0 + noise_dist.sample(&mut rng))
        .collect();
    Dataset::from_samples(x, y).unwrap()
}

/// Generate randomly placed x-values.
pub fn generate_random_x_data(size: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let x_dist = Uniform::new(0.0, 10.0).unwrap();
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size).map(|_| x_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| -1.5 * xi + 20.0 + noise_dist.sample(&mut rng))
        .collect();
    Dataset::from_samples(x, y).unwrap()
}

/// Generate data with outliers (5% of points are shifted far off the line).
pub fn generate_outlier_data(size: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();
    let outlier_dist = Uniform::new(-50.0, 50.0).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let mut y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.5 * xi + 4.0 + noise_dist.sample(&mut rng))
        .collect();

    // Add 5% outliers
    let n_outliers = size / 20;
    for _ in 0..n_outliers {
        let idx = rng.random_range(0..size);
        y[idx] += outlier_dist.sample(&mut rng);
    }
    Dataset::from_samples(x, y).unwrap()
}

/// Generate clustered x-values (groups with tiny spacing).
pub fn generate_clustered_data(size: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size)
        .map(|i| (i / 100) as f64 * 0.1 + (i % 100) as f64 * 1e-6)
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.5 * xi + 4.0 + noise_dist.sample(&mut rng))
        .collect();
    Dataset::from_samples(x, y).unwrap()
}

/// Generate high-noise data (noise dwarfs the trend).
pub fn generate_high_noise_data(size: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 20.0).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.5 * xi + noise_dist.sample(&mut rng))
        .collect();
    Dataset::from_samples(x, y).unwrap()
}

/// Render a dataset as two-column CSV with a header row.
pub fn to_csv(data: &Dataset<f64>) -> String {
    let mut out = String::from("x,y\n");
    for (x, y) in data.iter() {
        writeln!(out, "{},{}", x, y).unwrap();
    }
    out
}
