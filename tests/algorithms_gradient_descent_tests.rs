#![cfg(feature = "dev")]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use linreg_rs::internals::algorithms::gradient_descent::{
    DEFAULT_LEARNING_RATE, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, GradientDescentConfig,
    fit_gradient_descent,
};
use linreg_rs::internals::primitives::errors::LinregError;

const X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const Y: [f64; 5] = [45.0, 55.0, 65.0, 75.0, 85.0];

fn config(learning_rate: f64, max_iterations: usize, tolerance: f64) -> GradientDescentConfig<f64> {
    GradientDescentConfig {
        learning_rate,
        max_iterations,
        tolerance,
    }
}

#[test]
fn test_default_config() {
    let config = GradientDescentConfig::<f64>::default();

    assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
    assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(DEFAULT_LEARNING_RATE, 0.01);
    assert_eq!(DEFAULT_MAX_ITERATIONS, 1000);
    assert_eq!(DEFAULT_TOLERANCE, 1e-6);
}

#[test]
fn test_converges_to_least_squares_solution() {
    let outcome = fit_gradient_descent(&X, &Y, &config(0.01, 10_000, 1e-6)).unwrap();

    assert!(outcome.converged);
    assert!(outcome.iterations < 10_000);
    assert_abs_diff_eq!(outcome.fit.slope, 10.0, epsilon = 1e-2);
    assert_abs_diff_eq!(outcome.fit.intercept, 35.0, epsilon = 1e-2);
}

#[test]
fn test_default_budget_stops_short() {
    // 1000 passes at 0.01 are not enough on this data
    let outcome = fit_gradient_descent(&X, &Y, &GradientDescentConfig::default()).unwrap();

    assert!(!outcome.converged);
    assert_eq!(outcome.iterations, 1000);
    assert_abs_diff_eq!(outcome.fit.slope, 10.2804, epsilon = 1e-3);
    assert_abs_diff_eq!(outcome.fit.intercept, 33.9876, epsilon = 1e-3);
}

#[test]
fn test_larger_step_converges_faster() {
    let slow = fit_gradient_descent(&X, &Y, &config(0.01, 10_000, 1e-6)).unwrap();
    let fast = fit_gradient_descent(&X, &Y, &config(0.05, 10_000, 1e-6)).unwrap();

    assert!(fast.converged);
    assert!(fast.iterations < slow.iterations);
    assert_abs_diff_eq!(fast.fit.slope, 10.0, epsilon = 1e-3);
}

#[test]
fn test_deterministic() {
    let c = config(0.01, 500, 1e-9);
    let a = fit_gradient_descent(&X, &Y, &c).unwrap();
    let b = fit_gradient_descent(&X, &Y, &c).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_single_iteration_from_zero() {
    // From (0, 0): slope_grad = -(2/n)·Σ xᵢyᵢ, intercept_grad = -(2/n)·Σ yᵢ
    let outcome = fit_gradient_descent(&X, &Y, &config(0.01, 1, 1e-6)).unwrap();

    let sum_xy: f64 = X.iter().zip(Y.iter()).map(|(x, y)| x * y).sum();
    let sum_y: f64 = Y.iter().sum();
    assert!(!outcome.converged);
    assert_eq!(outcome.iterations, 1);
    assert_relative_eq!(outcome.fit.slope, 0.01 * 0.4 * sum_xy, epsilon = 1e-12);
    assert_relative_eq!(outcome.fit.intercept, 0.01 * 0.4 * sum_y, epsilon = 1e-12);
}

#[test]
fn test_converged_step_is_discarded() {
    // Run to convergence, then replay with the budget cut one pass short.
    // The converged parameters must equal the last committed ones.
    let converged = fit_gradient_descent(&X, &Y, &config(0.05, 10_000, 1e-6)).unwrap();
    assert!(converged.converged);

    let replay = fit_gradient_descent(
        &X,
        &Y,
        &config(0.05, converged.iterations - 1, 1e-6),
    )
    .unwrap();
    assert!(!replay.converged);
    assert_eq!(replay.fit, converged.fit);
}

#[test]
fn test_exact_fit_converges_immediately() {
    // Data on y = 0: the first proposed step is zero
    let outcome = fit_gradient_descent(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &config(0.01, 100, 1e-6))
        .unwrap();

    assert!(outcome.converged);
    assert_eq!(outcome.iterations, 1);
    assert_eq!(outcome.fit.slope, 0.0);
    assert_eq!(outcome.fit.intercept, 0.0);
}

#[test]
fn test_identical_x_still_fits() {
    // Least squares is undefined here; descent settles on a line through the mean
    let outcome =
        fit_gradient_descent(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], &config(0.01, 10_000, 1e-6))
            .unwrap();

    assert!(outcome.converged);
    assert_abs_diff_eq!(2.0 * outcome.fit.slope + outcome.fit.intercept, 2.0, epsilon = 1e-3);
}

#[test]
fn test_invalid_inputs() {
    let c = GradientDescentConfig::default();
    assert_eq!(
        fit_gradient_descent::<f64>(&[], &[], &c),
        Err(LinregError::InsufficientData { got: 0, min: 1 })
    );
    assert_eq!(
        fit_gradient_descent(&[1.0], &[1.0, 2.0], &c),
        Err(LinregError::MismatchedInputs { x_len: 1, y_len: 2 })
    );
}
