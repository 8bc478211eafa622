//! Diagnostic metrics for fit quality assessment.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics from observed and fitted
//! values: mean squared error, root mean squared error, mean absolute error,
//! and the coefficient of determination.
//!
//! ## Design notes
//!
//! * **Residual-based**: All metrics derive from `y - ŷ` and the observed values.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Error Metrics**: MSE, RMSE, and MAE measure prediction error magnitude.
//! * **Goodness-of-Fit**: R² measures the variance explained by the fitted line.
//!
//! ## Invariants
//!
//! * Error metrics (MSE, RMSE, MAE) are non-negative.
//! * R² <= 1 (R² = 1 is a perfect fit).
//! * A dependent variable with zero variance yields R² = 0, never NaN. This
//!   saturation convention matches the estimator's `r_squared` operation.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting itself.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing fit quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Mean Squared Error (MSE).
    pub mse: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute all diagnostic metrics from observed and fitted values.
    pub fn compute(y: &[T], y_hat: &[T]) -> Self {
        let mse = Self::calculate_mse(y, y_hat);

        Diagnostics {
            mse,
            rmse: mse.sqrt(),
            mae: Self::calculate_mae(y, y_hat),
            r_squared: Self::calculate_r_squared(y, y_hat),
        }
    }

    // ========================================================================
    // Error Metrics
    // ========================================================================

    /// Compute the mean squared error.
    /// MSE = (1/n) * Σ (y_i - ŷ_i)².
    pub fn calculate_mse(y: &[T], y_hat: &[T]) -> T {
        let n_t = T::from(y.len()).unwrap_or(T::one());
        let rss = y
            .iter()
            .zip(y_hat.iter())
            .fold(T::zero(), |acc, (&yi, &yh)| {
                let r = yi - yh;
                acc + r * r
            });

        rss / n_t
    }

    /// Compute the root mean squared error.
    /// RMSE = sqrt(MSE).
    pub fn calculate_rmse(y: &[T], y_hat: &[T]) -> T {
        Self::calculate_mse(y, y_hat).sqrt()
    }

    /// Compute the mean absolute error.
    /// MAE = (1/n) * Σ |y_i - ŷ_i|.
    pub fn calculate_mae(y: &[T], y_hat: &[T]) -> T {
        let n_t = T::from(y.len()).unwrap_or(T::one());
        let sum = y
            .iter()
            .zip(y_hat.iter())
            .fold(T::zero(), |acc, (&yi, &yh)| acc + (yi - yh).abs());

        sum / n_t
    }

    // ========================================================================
    // Goodness-of-Fit Metrics
    // ========================================================================

    /// Compute the coefficient of determination.
    /// R² = 1 - SS_res / SS_tot, where SS_res is the residual sum of squares
    /// and SS_tot is the total sum of squares.
    ///
    /// Returns exactly zero when SS_tot is zero (all observed values
    /// identical); there is no variance to explain.
    pub fn calculate_r_squared(y: &[T], y_hat: &[T]) -> T {
        let n_t = T::from(y.len()).unwrap_or(T::one());

        // Compute mean
        let sum = y.iter().copied().fold(T::zero(), |acc, v| acc + v);
        let mean = sum / n_t;

        // Compute SS_tot and SS_res in one pass
        let (ss_tot, ss_res) =
            y.iter()
                .zip(y_hat.iter())
                .fold((T::zero(), T::zero()), |(tot, res), (&yi, &yh)| {
                    let deviation = yi - mean;
                    let residual = yi - yh;
                    (tot + deviation * deviation, res + residual * residual)
                });

        if ss_tot == T::zero() {
            T::zero()
        } else {
            T::one() - ss_res / ss_tot
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  MSE:  {:.6}", self.mse)?;
        writeln!(f, "  RMSE: {:.6}", self.rmse)?;
        writeln!(f, "  MAE:  {:.6}", self.mae)?;
        writeln!(f, "  R²:   {:.6}", self.r_squared)?;

        Ok(())
    }
}
