//! Summary statistics and residual measures.
//!
//! ## Purpose
//!
//! This module provides the column statistics used by the dataset and the
//! fitting strategies: the arithmetic mean and the mean squared error
//! of a line against a set of samples.
//!
//! ## Design notes
//!
//! * **Single pass**: every helper walks its input once.
//! * **Allocation-free**: all helpers work on borrowed slices.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Empty input never panics; each helper documents its empty-input value.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf).
//! * This module does not provide weighted or robust statistics.

// External dependencies
use num_traits::Float;

// ============================================================================
// Column Statistics
// ============================================================================

/// Arithmetic mean. Returns `None` for an empty slice.
#[inline]
pub fn mean<T: Float>(vals: &[T]) -> Option<T> {
    if vals.is_empty() {
        return None;
    }
    let sum = vals.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / T::from(vals.len())?)
}

// ============================================================================
// Residual Measures
// ============================================================================

/// Sum of squared residuals of `y = slope * x + intercept`.
///
/// Pairs are taken in lockstep; extra elements of the longer slice are ignored.
#[inline]
pub fn residual_sum_of_squares<T: Float>(x: &[T], y: &[T], slope: T, intercept: T) -> T {
    x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xi, &yi)| {
        let r = yi - (slope * xi + intercept);
        acc + r * r
    })
}

/// Mean squared error of `y = slope * x + intercept`.
///
/// # Empty or mismatched input
///
/// Returns `0.0` when the slices are empty or have different lengths. This is
/// a "nothing to measure" sentinel, not a claim of a perfect fit: check the
/// sample count before reading a zero as such.
#[inline]
pub fn mean_squared_error<T: Float>(x: &[T], y: &[T], slope: T, intercept: T) -> T {
    if x.is_empty() || x.len() != y.len() {
        return T::zero();
    }
    let n = T::from(x.len()).unwrap_or_else(T::one);
    residual_sum_of_squares(x, y, slope, intercept) / n
}
