//! Input validation for estimation data.
//!
//! ## Purpose
//!
//! This module provides validation for paired sample data before it reaches
//! the numerical core: length requirements and finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not detect degenerate variance; that is the solver's
//!   concern, so a single-point sample passes validation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for paired sample data.
///
/// Provides static methods returning `Result<(), OlsError>`, failing fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate paired input arrays for fitting or assessment.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), OlsError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(OlsError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(OlsError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }
}
