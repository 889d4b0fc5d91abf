//! Paired sample container for simple linear regression.
//!
//! ## Purpose
//!
//! This module provides [`Dataset`], the owned collection of `(x, y)`
//! samples plus axis labels that every fitting strategy trains against.
//!
//! ## Design notes
//!
//! * **Columnar**: x and y live in two `Vec`s that always have equal length.
//! * **Atomic replacement**: bulk loads build the new columns first and swap
//!   them in only on success.
//! * **No I/O**: [`Dataset::summary`] returns a value; display is the caller's job.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `x_values().len() == y_values().len()` at all times.
//! * Every stored value is finite.
//! * Insertion order is preserved.
//!
//! ## Non-goals
//!
//! * This module does not parse text (see the `io` layer).
//! * This module does not sort, deduplicate, or filter samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LinregError;

/// Default label of the x axis.
pub const DEFAULT_X_LABEL: &str = "X";

/// Default label of the y axis.
pub const DEFAULT_Y_LABEL: &str = "Y";

// ============================================================================
// Axis
// ============================================================================

/// Selects one of the two columns of a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Input (predictor) values.
    X,

    /// Output (response) values.
    Y,
}

// ============================================================================
// Dataset
// ============================================================================

/// Ordered `(x, y)` samples with axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T: Float> {
    x: Vec<T>,
    y: Vec<T>,
    x_label: String,
    y_label: String,
}

impl<T: Float> Default for Dataset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Dataset<T> {
    /// Create an empty dataset with labels `"X"` and `"Y"`.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
        }
    }

    /// Build a dataset from two equally long columns.
    pub fn from_samples(x: Vec<T>, y: Vec<T>) -> Result<Self, LinregError> {
        if x.len() != y.len() {
            return Err(LinregError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            check_finite(xi, "x", i)?;
            check_finite(yi, "y", i)?;
        }

        Ok(Self {
            x,
            y,
            ..Self::new()
        })
    }

    /// Append one sample at the end of both columns.
    pub fn add_point(&mut self, x: T, y: T) -> Result<(), LinregError> {
        let i = self.x.len();
        check_finite(x, "x", i)?;
        check_finite(y, "y", i)?;

        self.x.push(x);
        self.y.push(y);
        Ok(())
    }

    /// Replace all samples, and the labels when `labels` is given.
    ///
    /// Callers are expected to have validated the columns; this is the
    /// commit step of a bulk load.
    #[cfg_attr(not(feature = "std"), allow(dead_code))]
    pub(crate) fn replace(&mut self, x: Vec<T>, y: Vec<T>, labels: Option<(String, String)>) {
        debug_assert_eq!(x.len(), y.len());
        self.x = x;
        self.y = y;
        if let Some((x_label, y_label)) = labels {
            self.x_label = x_label;
            self.y_label = y_label;
        }
    }

    /// Remove every sample. Labels are kept.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }

    /// Number of samples.
    #[inline]
    pub fn size(&self) -> usize {
        self.x.len()
    }

    /// Whether the dataset holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The x column.
    #[inline]
    pub fn x_values(&self) -> &[T] {
        &self.x
    }

    /// The y column.
    #[inline]
    pub fn y_values(&self) -> &[T] {
        &self.y
    }

    /// Iterate over samples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Label of the x axis.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Label of the y axis.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Set both axis labels.
    pub fn set_labels(&mut self, x_label: impl Into<String>, y_label: impl Into<String>) {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
    }

    /// `(min, max)` of the requested column.
    pub fn range(&self, axis: Axis) -> Result<(T, T), LinregError> {
        let values = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        };
        column_range(values).ok_or(LinregError::EmptyDataset)
    }

    /// Snapshot of size, labels and ranges, rendered through `Display`.
    pub fn summary(&self) -> DatasetSummary<T> {
        DatasetSummary {
            size: self.size(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            x_range: column_range(&self.x),
            y_range: column_range(&self.y),
        }
    }
}

fn column_range<T: Float>(vals: &[T]) -> Option<(T, T)> {
    let (&first, rest) = vals.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

fn check_finite<T: Float>(value: T, column: &str, index: usize) -> Result<(), LinregError> {
    if !value.is_finite() {
        return Err(LinregError::InvalidNumericValue(format!(
            "{}[{}]={}",
            column,
            index,
            value.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(())
}

// ============================================================================
// Summary
// ============================================================================

/// Human-readable description of a [`Dataset`].
///
/// Ranges are `None` for an empty dataset and are then omitted from the
/// rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary<T> {
    /// Number of samples.
    pub size: usize,

    /// Label of the x axis.
    pub x_label: String,

    /// Label of the y axis.
    pub y_label: String,

    /// `(min, max)` of the x column.
    pub x_range: Option<(T, T)>,

    /// `(min, max)` of the y column.
    pub y_range: Option<(T, T)>,
}

impl<T: Float> fmt::Display for DatasetSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Dataset Summary ===")?;
        writeln!(f, "Size: {} data points", self.size)?;
        writeln!(f, "X Label: {}", self.x_label)?;
        writeln!(f, "Y Label: {}", self.y_label)?;

        if let Some((lo, hi)) = self.x_range {
            writeln!(f, "X Range: [{}, {}]", as_f64(lo), as_f64(hi))?;
        }
        if let Some((lo, hi)) = self.y_range {
            writeln!(f, "Y Range: [{}, {}]", as_f64(lo), as_f64(hi))?;
        }
        Ok(())
    }
}

#[inline]
fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
