//! Shared adapter for concurrent access to an estimator.
//!
//! ## Purpose
//!
//! This module provides [`SharedOls`], a cloneable handle around an [`Ols`]
//! estimator for use from multiple threads: exclusive-write access for
//! training, shared-read access for prediction and assessment.
//!
//! ## Design notes
//!
//! * **Pair granularity**: The lock guards the whole coefficient pair, so a
//!   reader can never observe a slope from one fit and an intercept from
//!   another.
//! * **Poison recovery**: The estimator mutates state with a single
//!   assignment after all fallible work, so a lock poisoned by a panicking
//!   reader cannot hold a torn pair; the guard's inner value is taken.
//!
//! ## Non-goals
//!
//! * This adapter does not provide streaming or incremental updates.
//! * This adapter does not queue or prioritize competing fits.

// External dependencies
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::vec::Vec;

use num_traits::Float;

// Internal dependencies
use crate::algorithms::ols::OlsSolver;
use crate::engine::estimator::Ols;
use crate::engine::output::FitReport;
use crate::primitives::errors::OlsError;
use crate::primitives::params::Coefficients;

// ============================================================================
// Shared Estimator
// ============================================================================

/// Cloneable, thread-safe handle to an [`Ols`] estimator.
///
/// All clones refer to the same underlying estimator; a `fit` through any
/// handle is observed by every other handle.
#[derive(Debug)]
pub struct SharedOls<T: Float> {
    inner: Arc<RwLock<Ols<T>>>,
}

impl<T: Float> Clone for SharedOls<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Float> Default for SharedOls<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SharedOls<T> {
    /// Create a handle around a new, untrained estimator.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Ols::new())),
        }
    }

    /// The fitted coefficients, or `None` when untrained.
    pub fn parameters(&self) -> Option<Coefficients<T>> {
        self.read().parameters()
    }

    /// Whether a successful fit has completed.
    pub fn is_trained(&self) -> bool {
        self.read().is_trained()
    }

    fn read(&self) -> RwLockReadGuard<'_, Ols<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ols<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Float + OlsSolver> SharedOls<T> {
    /// Fit the shared estimator under the write lock.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<(), OlsError> {
        self.write().fit(x, y)
    }

    /// Predict the output for a single input under the read lock.
    pub fn predict(&self, x: T) -> Result<T, OlsError> {
        self.read().predict(x)
    }

    /// Predict outputs for a sequence of inputs under the read lock.
    pub fn predict_slice(&self, xs: &[T]) -> Result<Vec<T>, OlsError> {
        self.read().predict_slice(xs)
    }

    /// Compute R² against a sample pair under the read lock.
    pub fn r_squared(&self, x: &[T], y: &[T]) -> Result<T, OlsError> {
        self.read().r_squared(x, y)
    }

    /// Evaluate the fitted line against a sample pair under the read lock.
    pub fn evaluate(&self, x: &[T], y: &[T]) -> Result<FitReport<T>, OlsError> {
        self.read().evaluate(x, y)
    }
}
