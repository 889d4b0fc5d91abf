//! # linreg-rs — Simple Linear Regression for Rust
//!
//! Fit a straight line `y = slope * x + intercept` to paired samples, using
//! either the closed-form least-squares estimator or batch gradient descent,
//! and predict with the result.
//!
//! ## What is simple linear regression?
//!
//! Given samples `(x₁, y₁), …, (xₙ, yₙ)`, simple linear regression picks the
//! line that minimizes the mean squared vertical distance between the samples
//! and the line:
//!
//! ```text
//! MSE(slope, intercept) = (1/n) · Σ (yᵢ - (slope · xᵢ + intercept))²
//! ```
//!
//! **Two ways to get there:**
//! - **Least squares** solves for the minimum directly from centered sums.
//!   Exact up to floating-point rounding, but undefined when every x is equal.
//! - **Gradient descent** starts from a zero line and steps against the
//!   gradient of the MSE until the steps become smaller than a tolerance.
//!   Approximate, tunable, and well defined on any non-empty data.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let mut session = RegressionSession::<f64>::new();
//! for (x, y) in [(1.0, 45.0), (2.0, 55.0), (3.0, 65.0), (4.0, 75.0), (5.0, 85.0)] {
//!     session.add_point(x, y)?;
//! }
//!
//! // Select a strategy, then train it
//! session.use_least_squares();
//! session.train_model()?;
//!
//! let result = session.results()?;
//! assert_eq!(result.equation(), "y = 10.0000 * x + 35.0000");
//! assert_eq!(session.predict(6.0)?, 95.0);
//!
//! println!("{}", result);
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ```text
//! === Regression Results ===
//! Method: Least Squares
//! Equation: y = 10.0000 * x + 35.0000
//! Slope: 10
//! Intercept: 35
//! Mean Squared Error: 0
//! Samples: 5 (Y vs X)
//! ```
//!
//! ### Gradient Descent
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let data = Dataset::<f64>::from_samples(
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![45.0, 55.0, 65.0, 75.0, 85.0],
//! )?;
//! let mut session = RegressionSession::with_dataset(data);
//!
//! let config = GradientDescent::new()
//!     .learning_rate(0.01)     // Step size
//!     .max_iterations(10_000)  // Iteration budget
//!     .tolerance(1e-6)         // Stop when both steps fall below this
//!     .build()?;
//!
//! session.use_gradient_descent(config)?;
//! session.train_model()?;
//!
//! let model = session.model().unwrap();
//! assert!((model.slope() - 10.0).abs() < 1e-2);
//! assert!((model.intercept() - 35.0).abs() < 1e-2);
//! assert_eq!(model.last_training().unwrap().converged, true);
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ### Loading CSV Data
//!
//! Two columns, x first. A first row of two non-numeric tokens sets the axis
//! labels; rows that are not two finite numbers are skipped and reported.
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let mut session = RegressionSession::<f64>::new();
//! let csv = "hours,score\n1,45\n2,55\noops,60\n3,65\n";
//! let report = session.load_reader(csv.as_bytes(), "scores.csv")?;
//!
//! assert_eq!(report.rows_loaded, 3);
//! assert_eq!(report.skipped.len(), 1);
//! assert_eq!(session.dataset().x_label(), "hours");
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ## Session Lifecycle
//!
//! [`prelude::RegressionSession`] enforces "select, then train, then
//! predict". Prediction before a successful training run returns
//! [`prelude::LinregError::ModelNotTrained`]. Changing the data or the
//! strategy invalidates the trained state.
//!
//! | Call                    | Requires                  | Error otherwise      |
//! |-------------------------|---------------------------|----------------------|
//! | `train_model`           | a strategy, ≥ 2 samples   | `NoStrategySelected`, `InsufficientData` |
//! | `predict`, `results`    | a trained strategy        | `ModelNotTrained`    |
//! | `dataset_summary`       | nothing                   | never fails          |
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`](https://docs.rs/log)
//! facade: training and ingestion at `debug`, per-iteration gradient descent
//! progress at `trace`. It never installs a logger and never prints.
//!
//! ## Feature Flags
//!
//! - **`std`** (default): CSV ingestion via the `csv` crate and
//!   `std::error::Error` for [`prelude::LinregError`]. Without it the crate is
//!   `no_std` + `alloc`.
//! - **`dev`**: Exposes the internal layers under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the `Dataset` sample container.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains means, ranges, and squared-error measures over sample columns.
mod math;

// Layer 3: Algorithms - core fitting algorithms.
//
// Contains the line type, the closed-form least-squares estimator, and
// batch gradient descent.
mod algorithms;

// Layer 4: Engine - orchestration and validation.
//
// Contains parameter validation, the trainable model, result assembly,
// and the regression session.
mod engine;

// IO - data ingestion (std only).
//
// Contains two-column CSV loading with header detection.
#[cfg(feature = "std")]
mod io;

// High-level fluent API.
//
// Provides the `GradientDescent` builder and re-exports the public types.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard linear regression prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use linreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Axis, Dataset, DatasetSummary, FittingMethod, GradientDescentBuilder as GradientDescent,
        GradientDescentConfig, LineFit, LinregError, RegressionModel, RegressionResult,
        RegressionSession, SessionState, TrainingReport,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{IngestReport, SkipReason, SkippedRow};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal data ingestion.
    #[cfg(feature = "std")]
    pub mod io {
        pub use crate::io::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
