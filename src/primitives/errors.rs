//! Error types for linear regression.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: ingestion, dataset statistics, strategy
//! configuration, training and prediction.
//!
//! ## Design notes
//!
//! * **Returned, never thrown**: every failure mode maps to one variant.
//! * **no_std**: `Display` is hand-written so the type works without `std`.
//! * **Comparable**: `Clone + PartialEq` so callers can branch on and store errors.
//!
//! ## Non-goals
//!
//! * Row-level parse failures during ingestion are not errors; they are
//!   reported through the ingestion report.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

/// Errors produced by the regression engine.
#[derive(Debug, Clone, PartialEq)]
pub enum LinregError {
    /// The data source could not be opened or read.
    Ingestion {
        /// Name of the source (usually a file path).
        source: String,
        /// Underlying reason reported by the reader.
        reason: String,
    },

    /// The operation requires at least one sample.
    EmptyDataset,

    /// Too few samples to train.
    InsufficientData {
        /// Samples available.
        got: usize,
        /// Samples required.
        min: usize,
    },

    /// Training was requested before any fitting strategy was selected.
    NoStrategySelected,

    /// Prediction or results were requested before a successful training run.
    ModelNotTrained,

    /// All x-values are identical, so the least-squares slope is undefined.
    DegenerateDataset,

    /// x and y sequences have different lengths.
    MismatchedInputs {
        /// Length of the x sequence.
        x_len: usize,
        /// Length of the y sequence.
        y_len: usize,
    },

    /// A non-finite value was supplied where a finite one is required.
    InvalidNumericValue(String),

    /// Learning rate must be positive and finite.
    InvalidLearningRate(f64),

    /// Iteration budget must be at least one.
    InvalidMaxIterations(usize),

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for LinregError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinregError::Ingestion { source, reason } => {
                write!(f, "Cannot read data source '{}': {}", source, reason)
            }
            LinregError::EmptyDataset => write!(f, "Dataset is empty"),
            LinregError::InsufficientData { got, min } => write!(
                f,
                "Insufficient data for training: got {} points, need at least {}",
                got, min
            ),
            LinregError::NoStrategySelected => write!(
                f,
                "No regression model selected. Select least squares or gradient descent first"
            ),
            LinregError::ModelNotTrained => {
                write!(f, "Model not trained. Train the model first")
            }
            LinregError::DegenerateDataset => write!(
                f,
                "Degenerate dataset: all x-values are identical, slope is undefined"
            ),
            LinregError::MismatchedInputs { x_len, y_len } => write!(
                f,
                "Length mismatch: x has {} points, y has {}",
                x_len, y_len
            ),
            LinregError::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            LinregError::InvalidLearningRate(lr) => write!(
                f,
                "Invalid learning rate: {} (must be > 0 and finite)",
                lr
            ),
            LinregError::InvalidMaxIterations(n) => {
                write!(f, "Invalid max iterations: {} (must be at least 1)", n)
            }
            LinregError::InvalidTolerance(tol) => write!(
                f,
                "Invalid tolerance: {} (must be > 0 and finite)",
                tol
            ),
            LinregError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinregError {}
