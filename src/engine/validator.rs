//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by the builders and
//! the training session. It checks the minimum sample count and the
//! gradient descent hyperparameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Learning rate and tolerance must be positive and finite.
//! * **Iteration Budget**: At least one gradient pass is required.
//! * **Regression Requirements**: At least 2 points are needed to train.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fitting itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gradient_descent::GradientDescentConfig;
use crate::primitives::errors::LinregError;

/// Minimum number of samples a session will train on.
pub const MIN_TRAINING_POINTS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// All methods return `Result<(), LinregError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that a dataset is large enough to train on.
    pub fn validate_training_size(n: usize) -> Result<(), LinregError> {
        if n < MIN_TRAINING_POINTS {
            return Err(LinregError::InsufficientData {
                got: n,
                min: MIN_TRAINING_POINTS,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the gradient descent step size.
    pub fn validate_learning_rate<T: Float>(lr: T) -> Result<(), LinregError> {
        if !lr.is_finite() || lr <= T::zero() {
            return Err(LinregError::InvalidLearningRate(
                lr.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the gradient descent iteration budget.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), LinregError> {
        if max_iterations == 0 {
            return Err(LinregError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), LinregError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(LinregError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a complete gradient descent configuration.
    pub fn validate_gradient_descent<T: Float>(
        config: &GradientDescentConfig<T>,
    ) -> Result<(), LinregError> {
        Self::validate_learning_rate(config.learning_rate)?;
        Self::validate_max_iterations(config.max_iterations)?;
        Self::validate_tolerance(config.tolerance)
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LinregError> {
        if let Some(param) = duplicate_param {
            return Err(LinregError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
