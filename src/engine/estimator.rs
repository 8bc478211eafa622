//! The ordinary least squares estimator.
//!
//! ## Purpose
//!
//! This module provides the estimator type [`Ols`]: it fits a regression
//! line to paired samples, predicts outputs for new inputs, reports the
//! fitted coefficients, and assesses goodness-of-fit.
//!
//! ## Design notes
//!
//! * **Two states**: Untrained (initial) and Trained. Only a successful
//!   `fit` moves the estimator into the Trained state.
//! * **Atomic updates**: `fit` installs a complete coefficient pair in a
//!   single state assignment after all fallible work has finished, so a
//!   failed refit leaves the previous coefficients observable.
//! * **No retained data**: Training data is read once during `fit`; only
//!   the two derived scalars survive the call.
//!
//! ## Key concepts
//!
//! * **Fitting**: Single-pass moment accumulation followed by the
//!   closed-form solver.
//! * **Prediction**: `ŷ = slope·x + intercept`, scalar or elementwise.
//! * **Assessment**: R² against any equal-length sample pair, plus a full
//!   [`FitReport`] via `evaluate`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::{solve_ols, OlsSolver};
use crate::engine::output::FitReport;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::OlsError;
use crate::primitives::params::{Coefficients, ModelState};

// ============================================================================
// Estimator
// ============================================================================

/// Ordinary least squares simple linear regression estimator.
///
/// Owns the slope/intercept pair of the fitted line `y = slope·x + intercept`.
/// Starts untrained; [`fit`](Ols::fit) trains it, and may be called again to
/// retrain on new data.
#[derive(Debug, Clone)]
pub struct Ols<T: Float> {
    state: ModelState<T>,
}

impl<T: Float> Default for Ols<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Ols<T> {
    /// Create a new, untrained estimator.
    pub fn new() -> Self {
        Self {
            state: ModelState::Untrained,
        }
    }

    /// The fitted coefficients, or `None` when untrained.
    ///
    /// Never fails; it reports the untrained state as `None` rather than
    /// as an error.
    pub fn parameters(&self) -> Option<Coefficients<T>> {
        self.state.coefficients()
    }

    /// Whether a successful fit has completed.
    pub fn is_trained(&self) -> bool {
        self.state.is_trained()
    }

    fn trained(&self) -> Result<Coefficients<T>, OlsError> {
        self.state.coefficients().ok_or(OlsError::NotTrained)
    }
}

impl<T: Float + OlsSolver> Ols<T> {
    // ========================================================================
    // Training
    // ========================================================================

    /// Fit the regression line to the provided paired samples.
    ///
    /// Computes the sample means, then the slope as the ratio of centered
    /// covariance to centered x-variance, and the intercept from the means.
    ///
    /// # Errors
    ///
    /// * [`OlsError::EmptyInput`], [`OlsError::MismatchedInputs`],
    ///   [`OlsError::InvalidNumericValue`] on malformed inputs.
    /// * [`OlsError::ZeroVarianceX`] when all x-values are identical; the
    ///   slope is undefined and the stored state is left unchanged.
    pub fn fit(&mut self, x: &[T], y: &[T]) -> Result<(), OlsError> {
        Validator::validate_inputs(x, y)?;

        let sums = T::accumulate_sums(x, y);
        let coefficients = solve_ols(x.len(), sums)?;

        // Single assignment: any failure above leaves the prior state intact.
        self.state = ModelState::Trained(coefficients);

        Ok(())
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Predict the output for a single input.
    ///
    /// # Errors
    ///
    /// [`OlsError::NotTrained`] when no successful fit has completed.
    pub fn predict(&self, x: T) -> Result<T, OlsError> {
        let coefficients = self.trained()?;
        Ok(coefficients.predict(x))
    }

    /// Predict outputs for a sequence of inputs.
    ///
    /// The output preserves the order and length of the input.
    ///
    /// # Errors
    ///
    /// [`OlsError::NotTrained`] when no successful fit has completed.
    pub fn predict_slice(&self, xs: &[T]) -> Result<Vec<T>, OlsError> {
        let coefficients = self.trained()?;
        Ok(xs.iter().map(|&x| coefficients.predict(x)).collect())
    }

    // ========================================================================
    // Assessment
    // ========================================================================

    /// Compute the coefficient of determination against a sample pair.
    ///
    /// R² = 1 − SS_res/SS_tot. Returns exactly zero when the dependent
    /// variable has zero variance (SS_tot = 0); this saturation is the
    /// documented convention, not an error.
    ///
    /// # Errors
    ///
    /// Input errors as in [`fit`](Ols::fit), plus [`OlsError::NotTrained`].
    pub fn r_squared(&self, x: &[T], y: &[T]) -> Result<T, OlsError> {
        Validator::validate_inputs(x, y)?;
        let y_hat = self.predict_slice(x)?;

        Ok(Diagnostics::calculate_r_squared(y, &y_hat))
    }

    /// Evaluate the fitted line against a sample pair.
    ///
    /// Produces a [`FitReport`] with fitted values, residuals, and the full
    /// diagnostic metrics (MSE, RMSE, MAE, R²).
    ///
    /// # Errors
    ///
    /// Input errors as in [`fit`](Ols::fit), plus [`OlsError::NotTrained`].
    pub fn evaluate(&self, x: &[T], y: &[T]) -> Result<FitReport<T>, OlsError> {
        Validator::validate_inputs(x, y)?;
        let coefficients = self.trained()?;

        let fitted = self.predict_slice(x)?;
        let residuals: Vec<T> = y
            .iter()
            .zip(fitted.iter())
            .map(|(&observed, &predicted)| observed - predicted)
            .collect();
        let diagnostics = Diagnostics::compute(y, &fitted);

        Ok(FitReport {
            x: x.to_vec(),
            y: y.to_vec(),
            fitted,
            residuals,
            coefficients,
            diagnostics,
        })
    }
}
