//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric helpers used by the fitting algorithms:
//! - Means over a column
//! - Residual sums for a fitted line
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summary statistics and residual measures.
pub mod stats;
