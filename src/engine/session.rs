//! Regression session: one dataset, at most one strategy, guarded training.
//!
//! ## Purpose
//!
//! This module provides [`RegressionSession`], the orchestration object that
//! ties a dataset to a fitting strategy and enforces the lifecycle
//! "select a strategy and train before predicting".
//!
//! ## Design notes
//!
//! * **Owned slot**: The session owns its dataset and at most one
//!   [`RegressionModel`]. Selecting a strategy drops the previous one.
//! * **Trained flag**: Set only by a successful [`RegressionSession::train_model`];
//!   cleared by every dataset load or append and every successful strategy
//!   selection.
//! * **Silent core**: No method prints. Summaries and results are returned as values.
//!
//! ## Key concepts
//!
//! ```text
//!            load / add            select             train
//!   Empty ───────────▶ DataLoaded ───────▶ StrategySelected ───────▶ Trained
//!                                                 ▲                     │
//!                                                 └─ load / add / select┘
//! ```
//!
//! ## Invariants
//!
//! * `is_trained()` implies a strategy is selected and the dataset has not
//!   changed since that strategy was trained on it.
//! * A session is not meant to be shared between threads without external
//!   serialization.
//!
//! ## Non-goals
//!
//! * This module does not decide how errors are shown or retried.
//! * This module does not persist trained models.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::{io::Read, path::Path};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gradient_descent::GradientDescentConfig;
use crate::engine::model::{FittingMethod, RegressionModel};
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::primitives::dataset::{Axis, Dataset, DatasetSummary};
use crate::primitives::errors::LinregError;

#[cfg(feature = "std")]
use crate::io::csv::IngestReport;

// ============================================================================
// Session State
// ============================================================================

/// Lifecycle stage of a [`RegressionSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No samples and no strategy.
    Empty,

    /// Samples present, no strategy selected.
    DataLoaded,

    /// A strategy is selected but has not been trained on the current data.
    ///
    /// Loading or appending data while a strategy is selected returns here,
    /// not to [`SessionState::DataLoaded`]: the strategy slot is kept.
    StrategySelected,

    /// The selected strategy is trained on the current data.
    Trained,
}

// ============================================================================
// Regression Session
// ============================================================================

/// Owns a dataset and the active fitting strategy.
#[derive(Debug, Clone)]
pub struct RegressionSession<T: Float> {
    dataset: Dataset<T>,
    model: Option<RegressionModel<T>>,
    trained: bool,
}

impl<T: Float> Default for RegressionSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionSession<T> {
    /// Create a session with an empty dataset and no strategy.
    pub fn new() -> Self {
        Self::with_dataset(Dataset::new())
    }

    /// Create a session around an existing dataset.
    pub fn with_dataset(dataset: Dataset<T>) -> Self {
        Self {
            dataset,
            model: None,
            trained: false,
        }
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Replace the dataset with the contents of a CSV file.
    ///
    /// The trained flag is cleared even when loading fails.
    #[cfg(feature = "std")]
    pub fn load_data<P: AsRef<Path>>(&mut self, path: P) -> Result<IngestReport, LinregError> {
        self.trained = false;
        self.dataset.ingest_path(path)
    }

    /// Replace the dataset with CSV text read from `reader`.
    #[cfg(feature = "std")]
    pub fn load_reader<R: Read>(
        &mut self,
        reader: R,
        source: &str,
    ) -> Result<IngestReport, LinregError> {
        self.trained = false;
        self.dataset.ingest_reader(reader, source)
    }

    /// Replace the dataset wholesale.
    pub fn set_dataset(&mut self, dataset: Dataset<T>) {
        self.trained = false;
        self.dataset = dataset;
    }

    /// Append one sample.
    pub fn add_point(&mut self, x: T, y: T) -> Result<(), LinregError> {
        self.trained = false;
        self.dataset.add_point(x, y)
    }

    /// Set both axis labels. Does not affect the trained state.
    pub fn set_labels(&mut self, x_label: &str, y_label: &str) {
        self.dataset.set_labels(x_label, y_label);
    }

    /// The owned dataset.
    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    /// Summary of the dataset. Available in every state.
    pub fn dataset_summary(&self) -> DatasetSummary<T> {
        self.dataset.summary()
    }

    // ========================================================================
    // Strategy Selection
    // ========================================================================

    /// Select a fitting method, discarding the current strategy.
    ///
    /// # Errors
    ///
    /// Returns the validation error of an invalid gradient descent
    /// configuration; the current strategy is then kept.
    pub fn select(&mut self, method: FittingMethod<T>) -> Result<(), LinregError> {
        if let FittingMethod::GradientDescent(config) = &method {
            Validator::validate_gradient_descent(config)?;
        }
        self.model = Some(RegressionModel::new(method));
        self.trained = false;
        Ok(())
    }

    /// Select closed-form least squares.
    pub fn use_least_squares(&mut self) {
        self.model = Some(RegressionModel::least_squares());
        self.trained = false;
    }

    /// Select gradient descent with `config`.
    pub fn use_gradient_descent(
        &mut self,
        config: GradientDescentConfig<T>,
    ) -> Result<(), LinregError> {
        self.select(FittingMethod::GradientDescent(config))
    }

    /// The active strategy, trained or not.
    pub fn model(&self) -> Option<&RegressionModel<T>> {
        self.model.as_ref()
    }

    // ========================================================================
    // Training
    // ========================================================================

    /// Train the selected strategy on the dataset.
    ///
    /// # Errors
    ///
    /// * [`LinregError::NoStrategySelected`] when no strategy is selected.
    /// * [`LinregError::InsufficientData`] when fewer than two samples are present.
    /// * Any error of the strategy itself, e.g. [`LinregError::DegenerateDataset`].
    pub fn train_model(&mut self) -> Result<(), LinregError> {
        let model = self.model.as_mut().ok_or(LinregError::NoStrategySelected)?;
        Validator::validate_training_size(self.dataset.size())?;

        log::debug!(
            "training {} on {} samples",
            model.method(),
            self.dataset.size()
        );
        self.trained = false;
        model.train(&self.dataset)?;
        self.trained = true;
        log::debug!("training completed: {}", model.describe());

        Ok(())
    }

    /// Whether the active strategy is trained on the current dataset.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Current lifecycle stage.
    pub fn state(&self) -> SessionState {
        match (&self.model, self.trained) {
            (Some(_), true) => SessionState::Trained,
            (Some(_), false) => SessionState::StrategySelected,
            (None, _) if !self.dataset.is_empty() => SessionState::DataLoaded,
            (None, _) => SessionState::Empty,
        }
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    fn trained_model(&self) -> Result<&RegressionModel<T>, LinregError> {
        match (&self.model, self.trained) {
            (Some(model), true) => Ok(model),
            _ => Err(LinregError::ModelNotTrained),
        }
    }

    /// Predict y at `x` with the trained strategy.
    pub fn predict(&self, x: T) -> Result<T, LinregError> {
        Ok(self.trained_model()?.predict(x))
    }

    /// Predict y at every element of `xs`.
    pub fn predict_many(&self, xs: &[T]) -> Result<Vec<T>, LinregError> {
        Ok(self.trained_model()?.predict_many(xs))
    }

    /// Whether `x` lies outside the x-range the model was trained on.
    ///
    /// Predictions there are extrapolations. The session never refuses them;
    /// this lets the caller decide whether to warn.
    pub fn is_extrapolation(&self, x: T) -> Result<bool, LinregError> {
        self.trained_model()?;
        let (lo, hi) = self.dataset.range(Axis::X)?;
        Ok(x < lo || x > hi)
    }

    /// Report of the trained model.
    pub fn results(&self) -> Result<RegressionResult<T>, LinregError> {
        let model = self.trained_model()?;
        Ok(RegressionResult::from_model(
            model,
            self.dataset.x_label(),
            self.dataset.y_label(),
        ))
    }
}
