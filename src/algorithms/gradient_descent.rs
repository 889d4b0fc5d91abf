//! Batch gradient descent on the mean squared error of a line.
//!
//! ## Purpose
//!
//! This module fits `y = slope * x + intercept` iteratively, stepping both
//! parameters against the gradient of the mean squared error computed over
//! the whole dataset.
//!
//! ## Design notes
//!
//! * **Start**: Both parameters start at zero on every call, so repeated
//!   training on the same data is deterministic.
//! * **Stopping**: The loop stops when the proposed step moves both
//!   parameters by less than the tolerance, or when the iteration budget runs out.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! eᵢ             = slope · xᵢ + intercept - yᵢ
//! slope_grad     = Σ (2/n) · eᵢ · xᵢ
//! intercept_grad = Σ (2/n) · eᵢ
//! new_slope      = slope - learning_rate · slope_grad
//! new_intercept  = intercept - learning_rate · intercept_grad
//! ```
//!
//! ## Invariants
//!
//! * The convergence check runs on the proposed step before it is committed.
//!   A step that falls below the tolerance is discarded, so the parameters
//!   stop one step short of it.
//! * An exhausted budget is not an error; the last committed parameters are
//!   returned with `converged == false`.
//!
//! ## Non-goals
//!
//! * This module does not validate its configuration (see the engine validator).
//! * This module does not detect divergence. A learning rate that is too
//!   large can drive the parameters to infinity or NaN.
//! * This module does not provide stochastic or mini-batch variants.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::line::LineFit;
use crate::primitives::errors::LinregError;

/// Default step size.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Configuration
// ============================================================================

/// Hyperparameters of gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescentConfig<T> {
    /// Step size applied to each gradient.
    pub learning_rate: T,

    /// Maximum number of gradient passes.
    pub max_iterations: usize,

    /// Per-parameter step size below which the descent is considered converged.
    pub tolerance: T,
}

impl<T: Float> Default for GradientDescentConfig<T> {
    fn default() -> Self {
        Self {
            learning_rate: T::from(DEFAULT_LEARNING_RATE).unwrap_or_else(T::epsilon),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a gradient descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentOutcome<T> {
    /// Last committed parameters.
    pub fit: LineFit<T>,

    /// Number of gradient passes performed, including the final discarded
    /// step when the run converged.
    pub iterations: usize,

    /// Whether the run stopped on the tolerance rather than the budget.
    pub converged: bool,
}

// ============================================================================
// Gradient Descent Fit
// ============================================================================

/// Fit a line by batch gradient descent.
///
/// # Errors
///
/// * [`LinregError::InsufficientData`] when the input is empty.
/// * [`LinregError::MismatchedInputs`] when `x` and `y` differ in length.
pub fn fit_gradient_descent<T: Float>(
    x: &[T],
    y: &[T],
    config: &GradientDescentConfig<T>,
) -> Result<DescentOutcome<T>, LinregError> {
    if x.len() != y.len() {
        return Err(LinregError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(LinregError::InsufficientData { got: 0, min: 1 });
    }

    let n = T::from(x.len()).ok_or(LinregError::InsufficientData { got: 0, min: 1 })?;
    let two = T::one() + T::one();
    let scale = two / n;

    let mut slope = T::zero();
    let mut intercept = T::zero();

    for iteration in 0..config.max_iterations {
        let (slope_grad, intercept_grad) = x.iter().zip(y.iter()).fold(
            (T::zero(), T::zero()),
            |(gs, gi), (&xi, &yi)| {
                let error = slope * xi + intercept - yi;
                (gs + scale * error * xi, gi + scale * error)
            },
        );

        let new_slope = slope - config.learning_rate * slope_grad;
        let new_intercept = intercept - config.learning_rate * intercept_grad;

        if (new_slope - slope).abs() < config.tolerance
            && (new_intercept - intercept).abs() < config.tolerance
        {
            log::debug!(
                "gradient descent converged after {} iterations",
                iteration + 1
            );
            return Ok(DescentOutcome {
                fit: LineFit::new(slope, intercept),
                iterations: iteration + 1,
                converged: true,
            });
        }

        slope = new_slope;
        intercept = new_intercept;

        log::trace!(
            "iteration {}: slope={:?} intercept={:?}",
            iteration + 1,
            slope.to_f64(),
            intercept.to_f64()
        );
    }

    log::debug!(
        "gradient descent stopped at the iteration budget ({}) without converging",
        config.max_iterations
    );

    Ok(DescentOutcome {
        fit: LineFit::new(slope, intercept),
        iterations: config.max_iterations,
        converged: false,
    })
}
