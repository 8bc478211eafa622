//! Fitted coefficients and training state.
//!
//! ## Purpose
//!
//! This module defines the fitted line representation (`Coefficients`) and
//! the estimator's training state (`ModelState`).
//!
//! ## Key concepts
//!
//! * **Coefficients**: The slope/intercept pair defining `y = slope·x + intercept`.
//! * **Tagged state**: Untrained-ness is a variant, not a pair of nullable
//!   fields. Both coefficients exist together or neither does.
//!
//! ## Invariants
//!
//! * A `Trained` state always carries a complete coefficient pair.
//! * Transitioning states is a single enum assignment.

// External dependencies
use num_traits::Float;

// ============================================================================
// Coefficients
// ============================================================================

/// Fitted regression line coefficients (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T: Float> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,
}

impl<T: Float> Coefficients<T> {
    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// Model State
// ============================================================================

/// Training state of an estimator.
///
/// The state moves from `Untrained` to `Trained` only through a successful
/// fit; a failed fit leaves the current state unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelState<T: Float> {
    /// No successful fit has completed yet.
    Untrained,

    /// A complete coefficient pair from the most recent successful fit.
    Trained(Coefficients<T>),
}

impl<T: Float> Default for ModelState<T> {
    fn default() -> Self {
        Self::Untrained
    }
}

impl<T: Float> ModelState<T> {
    /// The stored coefficients, or `None` when untrained.
    #[inline]
    pub fn coefficients(&self) -> Option<Coefficients<T>> {
        match self {
            Self::Untrained => None,
            Self::Trained(c) => Some(*c),
        }
    }

    /// Whether a successful fit has completed.
    #[inline]
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained(_))
    }
}
