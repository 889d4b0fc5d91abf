//! Closed-form ordinary least squares for a single predictor.
//!
//! ## Purpose
//!
//! This module fits `y = slope * x + intercept` by solving the normal
//! equations directly, in centered form.
//!
//! ## Design notes
//!
//! * **Algorithm**: Two passes. The first computes the means, the second
//!   accumulates the centered cross-product and the centered sum of squares.
//! * **Centering**: Subtracting the means before multiplying keeps the sums
//!   well conditioned when x sits far from the origin.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! x̄ = mean(x), ȳ = mean(y)
//! slope     = Σ(xᵢ - x̄)(yᵢ - ȳ) / Σ(xᵢ - x̄)²
//! intercept = ȳ - slope · x̄
//! ```
//!
//! ## Invariants
//!
//! * The result minimizes the residual sum of squares over all lines.
//! * Identical input always yields bit-identical output.
//!
//! ## Non-goals
//!
//! * This module does not compute the training error (see the engine).
//! * This module does not handle weighted or multivariate regression.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::line::LineFit;
use crate::math::stats::mean;
use crate::primitives::errors::LinregError;

// ============================================================================
// Least Squares Fit
// ============================================================================

/// Fit a line by ordinary least squares.
///
/// # Errors
///
/// * [`LinregError::InsufficientData`] when the input is empty.
/// * [`LinregError::MismatchedInputs`] when `x` and `y` differ in length.
/// * [`LinregError::DegenerateDataset`] when every x-value is identical,
///   which makes the slope undefined.
pub fn fit_least_squares<T: Float>(x: &[T], y: &[T]) -> Result<LineFit<T>, LinregError> {
    if x.len() != y.len() {
        return Err(LinregError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let (x_mean, y_mean) = match (mean(x), mean(y)) {
        (Some(xm), Some(ym)) => (xm, ym),
        _ => return Err(LinregError::InsufficientData { got: 0, min: 1 }),
    };

    let (numerator, denominator) =
        x.iter()
            .zip(y.iter())
            .fold((T::zero(), T::zero()), |(num, den), (&xi, &yi)| {
                let dx = xi - x_mean;
                (num + dx * (yi - y_mean), den + dx * dx)
            });

    if denominator == T::zero() {
        return Err(LinregError::DegenerateDataset);
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    Ok(LineFit::new(slope, intercept))
}
