//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the two line-fitting algorithms:
//! - Closed-form ordinary least squares
//! - Batch gradient descent on the mean squared error
//!
//! Both produce a [`line::LineFit`] from borrowed x/y columns and know
//! nothing about datasets, sessions, or training state.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fitted line parameters.
pub mod line;

/// Closed-form least squares.
pub mod least_squares;

/// Iterative gradient descent.
pub mod gradient_descent;
