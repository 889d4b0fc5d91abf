//! Fitted line parameters.
//!
//! A [`LineFit`] is the output of every fitting algorithm: the slope and
//! intercept of `y = slope * x + intercept`.

// External dependencies
use num_traits::Float;

/// Slope and intercept of a fitted straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Change in y per unit change in x.
    pub slope: T,

    /// Value of y at x = 0.
    pub intercept: T,
}

impl<T: Float> Default for LineFit<T> {
    fn default() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
        }
    }
}

impl<T: Float> LineFit<T> {
    /// Create a line from its parameters.
    #[inline]
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}
