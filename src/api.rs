//! High-level API for OLS estimation.
//!
//! ## Purpose
//!
//! This module defines the public surface of the crate: the estimator, the
//! shared adapter, and the supporting result and error types. The estimator
//! has nothing to configure beyond its float precision, so construction is
//! direct (`Ols::new()`) rather than builder-based.

// Publicly re-exported types
#[cfg(feature = "std")]
pub use crate::adapters::shared::SharedOls;
pub use crate::algorithms::ols::OlsSolver;
pub use crate::engine::estimator::Ols;
pub use crate::engine::output::FitReport;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::OlsError;
pub use crate::primitives::params::{Coefficients, ModelState};
