//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fitting:
//! - Validation of data and hyperparameters
//! - The trainable model and its closed set of fitting methods
//! - The session that guards the untrained → trained lifecycle
//! - The result report
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// Trainable model and fitting methods.
pub mod model;

/// Result report.
pub mod output;

/// Training session.
pub mod session;
