//! Result report of a trained regression.
//!
//! [`RegressionResult`] is an owned snapshot of a trained model that renders
//! through `Display`. The crate never prints it; the caller decides where it goes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::model::{FittingMethod, RegressionModel, format_equation};

/// Snapshot of a trained model.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult<T> {
    /// Method that produced the fit.
    pub method: FittingMethod<T>,

    /// Fitted slope.
    pub slope: T,

    /// Fitted intercept.
    pub intercept: T,

    /// Mean squared error on the training data.
    pub mse: T,

    /// Number of training samples.
    pub samples: usize,

    /// Gradient passes performed (gradient descent only).
    pub iterations: Option<usize>,

    /// Whether the method reached its stopping criterion.
    pub converged: bool,

    /// Label of the x axis at training time.
    pub x_label: String,

    /// Label of the y axis at training time.
    pub y_label: String,
}

impl<T: Float> RegressionResult<T> {
    pub(crate) fn from_model(model: &RegressionModel<T>, x_label: &str, y_label: &str) -> Self {
        let report = model.last_training();
        Self {
            method: *model.method(),
            slope: model.slope(),
            intercept: model.intercept(),
            mse: model.mse(),
            samples: report.map_or(0, |r| r.samples),
            iterations: report.and_then(|r| r.iterations),
            converged: report.is_some_and(|r| r.converged),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    /// The fitted equation, `y = <slope> * x + <intercept>`, to 4 decimals.
    pub fn equation(&self) -> String {
        format_equation(self.slope, self.intercept)
    }
}

impl<T: Float> fmt::Display for RegressionResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        writeln!(f, "=== Regression Results ===")?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Equation: {}", self.equation())?;
        writeln!(f, "Slope: {}", to_f64(self.slope))?;
        writeln!(f, "Intercept: {}", to_f64(self.intercept))?;
        writeln!(f, "Mean Squared Error: {}", to_f64(self.mse))?;
        writeln!(
            f,
            "Samples: {} ({} vs {})",
            self.samples, self.y_label, self.x_label
        )?;

        if let Some(iterations) = self.iterations {
            let status = if self.converged {
                "converged"
            } else {
                "iteration budget exhausted"
            };
            writeln!(f, "Iterations: {} ({})", iterations, status)?;
        }
        Ok(())
    }
}
