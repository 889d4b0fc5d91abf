//! IO: data ingestion (requires `std`)
//!
//! # Purpose
//!
//! This layer reads samples from outside the process into a [`Dataset`]:
//! - CSV files on disk
//! - Any `std::io::Read` source
//! - In-memory text
//!
//! It sits beside the engine rather than under it; nothing in the fitting
//! layers depends on it.
//!
//! [`Dataset`]: crate::primitives::dataset::Dataset

/// Two-column CSV ingestion.
pub mod csv;
