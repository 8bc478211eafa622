//! Evaluation report types.
//!
//! ## Purpose
//!
//! This module defines the [`FitReport`] struct which bundles everything an
//! assessment of a fitted line produces: fitted values, residuals, the
//! coefficient pair, and diagnostic metrics.
//!
//! ## Design notes
//!
//! * **Generics**: Reports are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All vectors have the same length as the evaluated input.
//! * `residuals[i] == y[i] - fitted[i]`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::params::Coefficients;

// ============================================================================
// Report Structure
// ============================================================================

/// Evaluation output for a fitted regression line against a sample pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport<T: Float> {
    /// Input x-values (independent variable).
    pub x: Vec<T>,

    /// Observed y-values (dependent variable).
    pub y: Vec<T>,

    /// Fitted values (ŷ_i) for each input.
    pub fitted: Vec<T>,

    /// Residuals (y_i − ŷ_i) for each input.
    pub residuals: Vec<T>,

    /// The coefficient pair the report was evaluated with.
    pub coefficients: Coefficients<T>,

    /// Diagnostic metrics (MSE, RMSE, MAE, R²).
    pub diagnostics: Diagnostics<T>,
}

impl<T: Float> FitReport<T> {
    /// Number of evaluated observations.
    pub fn observations(&self) -> usize {
        self.x.len()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.observations())?;
        writeln!(f, "  Slope:       {:.6}", self.coefficients.slope)?;
        writeln!(f, "  Intercept:   {:.6}", self.coefficients.intercept)?;
        writeln!(f)?;

        writeln!(f, "{}", self.diagnostics)?;

        writeln!(f, "Fitted Data:")?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12}",
            "X", "Y", "Y_fit", "Residual"
        )?;
        writeln!(f, "{:-<47}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
                self.x[idx], self.y[idx], self.fitted[idx], self.residuals[idx]
            )?;
        }

        Ok(())
    }
}
