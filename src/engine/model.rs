//! Trainable line model with a selectable fitting strategy.
//!
//! ## Purpose
//!
//! This module provides [`RegressionModel`], one fitting-strategy instance:
//! the chosen [`FittingMethod`] plus the slope, intercept and training error
//! it produced. It implements the shared contract of every strategy
//! (train, predict, evaluate, describe).
//!
//! ## Design notes
//!
//! * **Closed dispatch**: strategies are the variants of [`FittingMethod`],
//!   matched exhaustively in [`RegressionModel::train`].
//! * **No trained flag**: parameters start at zero and carry no "trained"
//!   marker. Guarding against use before training is the session's job.
//! * **Atomic update**: a failed training run leaves the previous parameters in place.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `predict(x) == slope() * x + intercept()` for every `x`.
//! * Training the same model twice on the same data gives identical parameters.
//!
//! ## Non-goals
//!
//! * This module does not enforce the session's two-sample minimum.
//! * This module does not flag extrapolation beyond the training range.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gradient_descent::{GradientDescentConfig, fit_gradient_descent};
use crate::algorithms::least_squares::fit_least_squares;
use crate::algorithms::line::LineFit;
use crate::math::stats::mean_squared_error;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::LinregError;

// ============================================================================
// Fitting Method
// ============================================================================

/// Algorithm used to fit the line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FittingMethod<T> {
    /// Closed-form ordinary least squares (default).
    #[default]
    LeastSquares,

    /// Batch gradient descent with the given hyperparameters.
    GradientDescent(GradientDescentConfig<T>),
}

impl<T> FittingMethod<T> {
    /// Human-readable method name.
    pub fn name(&self) -> &'static str {
        match self {
            FittingMethod::LeastSquares => "Least Squares",
            FittingMethod::GradientDescent(_) => "Gradient Descent",
        }
    }
}

impl<T> fmt::Display for FittingMethod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Training Report
// ============================================================================

/// Bookkeeping from the last successful training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingReport {
    /// Number of samples trained on.
    pub samples: usize,

    /// Gradient passes performed; `None` for closed-form methods.
    pub iterations: Option<usize>,

    /// Whether the method reached its stopping criterion. Always `true` for
    /// least squares.
    pub converged: bool,
}

// ============================================================================
// Regression Model
// ============================================================================

/// One fitting-strategy instance and its current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionModel<T> {
    method: FittingMethod<T>,
    line: LineFit<T>,
    mse: T,
    report: Option<TrainingReport>,
}

impl<T: Float> RegressionModel<T> {
    /// Create an untrained model using `method`.
    pub fn new(method: FittingMethod<T>) -> Self {
        Self {
            method,
            line: LineFit::default(),
            mse: T::zero(),
            report: None,
        }
    }

    /// Create an untrained least-squares model.
    pub fn least_squares() -> Self {
        Self::new(FittingMethod::LeastSquares)
    }

    /// Create an untrained gradient-descent model.
    pub fn gradient_descent(config: GradientDescentConfig<T>) -> Self {
        Self::new(FittingMethod::GradientDescent(config))
    }

    // ========================================================================
    // Shared Contract
    // ========================================================================

    /// Fit the line to `dataset` and recompute the training error.
    ///
    /// # Errors
    ///
    /// * [`LinregError::InsufficientData`] when the dataset is empty.
    /// * [`LinregError::DegenerateDataset`] when least squares is asked to fit
    ///   a dataset whose x-values are all identical.
    pub fn train(&mut self, dataset: &Dataset<T>) -> Result<(), LinregError> {
        let (x, y) = (dataset.x_values(), dataset.y_values());
        if x.is_empty() {
            return Err(LinregError::InsufficientData { got: 0, min: 1 });
        }

        let (line, iterations, converged) = match &self.method {
            FittingMethod::LeastSquares => (fit_least_squares(x, y)?, None, true),
            FittingMethod::GradientDescent(config) => {
                let outcome = fit_gradient_descent(x, y, config)?;
                (outcome.fit, Some(outcome.iterations), outcome.converged)
            }
        };

        self.line = line;
        self.mse = mean_squared_error(x, y, line.slope, line.intercept);
        self.report = Some(TrainingReport {
            samples: x.len(),
            iterations,
            converged,
        });
        Ok(())
    }

    /// Evaluate the fitted line at `x`.
    ///
    /// No validation is performed; values outside the training range are
    /// extrapolated.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.line.evaluate(x)
    }

    /// Evaluate the fitted line at every element of `xs`.
    pub fn predict_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Mean squared error of the current parameters against any dataset.
    ///
    /// Returns `0.0` for an empty dataset. That value means "nothing to
    /// measure", not "perfect fit".
    pub fn evaluate_mse(&self, dataset: &Dataset<T>) -> T {
        mean_squared_error(
            dataset.x_values(),
            dataset.y_values(),
            self.line.slope,
            self.line.intercept,
        )
    }

    /// The fitted equation, `y = <slope> * x + <intercept>`, to 4 decimals.
    pub fn describe(&self) -> String {
        format_equation(self.line.slope, self.line.intercept)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The fitting method.
    pub fn method(&self) -> &FittingMethod<T> {
        &self.method
    }

    /// The fitted line.
    pub fn line(&self) -> LineFit<T> {
        self.line
    }

    /// Fitted slope (zero before training).
    pub fn slope(&self) -> T {
        self.line.slope
    }

    /// Fitted intercept (zero before training).
    pub fn intercept(&self) -> T {
        self.line.intercept
    }

    /// Mean squared error on the training data (zero before training).
    pub fn mse(&self) -> T {
        self.mse
    }

    /// Bookkeeping from the last successful training run.
    pub fn last_training(&self) -> Option<TrainingReport> {
        self.report
    }
}

/// Render `y = <slope> * x + <intercept>` with 4 decimals.
pub(crate) fn format_equation<T: Float>(slope: T, intercept: T) -> String {
    format!(
        "y = {:.4} * x + {:.4}",
        slope.to_f64().unwrap_or(f64::NAN),
        intercept.to_f64().unwrap_or(f64::NAN)
    )
}
