//! High-level API for linear regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing configuration entry point: a fluent
//! builder for gradient descent hyperparameters, plus re-exports of the
//! session, dataset, and result types.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are checked when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error at build time.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`GradientDescentBuilder`] via `GradientDescent::new()`.
//! 2. Chain configuration methods (`.learning_rate()`, `.max_iterations()`, `.tolerance()`).
//! 3. Call `.build()` to get a validated [`GradientDescentConfig`].
//! 4. Hand it to [`RegressionSession::use_gradient_descent`].

use core::fmt::Debug;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::gradient_descent::GradientDescentConfig;
pub use crate::algorithms::line::LineFit;
pub use crate::engine::model::{FittingMethod, RegressionModel, TrainingReport};
pub use crate::engine::output::RegressionResult;
pub use crate::engine::session::{RegressionSession, SessionState};
#[cfg(feature = "std")]
pub use crate::io::csv::{IngestReport, SkipReason, SkippedRow};
pub use crate::primitives::dataset::{Axis, Dataset, DatasetSummary};
pub use crate::primitives::errors::LinregError;

/// Fluent builder for gradient descent hyperparameters.
#[derive(Debug, Clone)]
pub struct GradientDescentBuilder<T: Float + Debug> {
    /// Step size (default 0.01).
    pub learning_rate: Option<T>,

    /// Iteration budget (default 1000).
    pub max_iterations: Option<usize>,

    /// Convergence tolerance (default 1e-6).
    pub tolerance: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for GradientDescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> GradientDescentBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            learning_rate: None,
            max_iterations: None,
            tolerance: None,
            duplicate_param: None,
        }
    }

    /// Set the step size applied to each gradient.
    pub fn learning_rate(mut self, learning_rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(learning_rate);
        self
    }

    /// Set the maximum number of gradient passes.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Validate the parameters and produce a configuration.
    pub fn build(self) -> Result<GradientDescentConfig<T>, LinregError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = GradientDescentConfig::default();
        let config = GradientDescentConfig {
            learning_rate: self.learning_rate.unwrap_or(defaults.learning_rate),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        };

        Validator::validate_gradient_descent(&config)?;

        Ok(config)
    }
}

impl<T> From<GradientDescentConfig<T>> for FittingMethod<T> {
    fn from(config: GradientDescentConfig<T>) -> Self {
        FittingMethod::GradientDescent(config)
    }
}
