//! # olsfit — Ordinary Least Squares simple linear regression for Rust
//!
//! A minimal, dependable estimator for the best-fit line through paired
//! samples of one independent and one dependent variable: fit, predict,
//! inspect the coefficients, and assess goodness-of-fit.
//!
//! ## What is OLS?
//!
//! Ordinary least squares fits the line `y = slope·x + intercept` by
//! minimizing the sum of squared vertical distances between observed and
//! predicted values. The closed-form solution needs a single pass over the
//! data: the slope is the ratio of the centered covariance to the centered
//! x-variance, and the intercept follows from the sample means.
//!
//! ## Quick Start
//!
//! ```rust
//! use olsfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! // Fit the model to the data
//! let mut model = Ols::<f64>::new();
//! model.fit(&x, &y)?;
//!
//! // Inspect the fitted line
//! let params = model.parameters().expect("trained");
//! assert!((params.slope - 2.0).abs() < 1e-12);
//! assert!((params.intercept).abs() < 1e-12);
//!
//! // Predict new outputs
//! let y_hat = model.predict(6.0)?;
//! assert!((y_hat - 12.0).abs() < 1e-12);
//!
//! // Goodness-of-fit
//! let r2 = model.r_squared(&x, &y)?;
//! assert!((r2 - 1.0).abs() < 1e-12);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ## Evaluation Reports
//!
//! `evaluate` bundles fitted values, residuals, and diagnostic metrics
//! (MSE, RMSE, MAE, R²) into a printable report:
//!
//! ```rust
//! use olsfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.1, 3.9, 6.2, 7.8, 10.1];
//!
//! let mut model = Ols::new();
//! model.fit(&x, &y)?;
//!
//! let report = model.evaluate(&x, &y)?;
//! println!("{}", report);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!   Slope:       1.990000
//!   Intercept:   0.050000
//!
//! Fit Diagnostics:
//!   MSE:  0.021400
//!   RMSE: 0.146287
//!   MAE:  0.136000
//!   R²:   0.997305
//!
//! Fitted Data:
//!        X            Y        Y_fit     Residual
//! -----------------------------------------------
//!     1.00     2.100000     2.040000     0.060000
//!     2.00     3.900000     4.030000    -0.130000
//!     3.00     6.200000     6.020000     0.180000
//!     4.00     7.800000     8.010000    -0.210000
//!     5.00    10.100000    10.000000     0.100000
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, OlsError>`; the `?` operator
//! is idiomatic. Training on a constant independent variable fails with
//! `ZeroVarianceX` (the slope is undefined), and predicting before training
//! fails with `NotTrained`:
//!
//! ```rust
//! use olsfit::prelude::*;
//!
//! let mut model: Ols<f64> = Ols::new();
//! assert_eq!(model.predict(1.0), Err(OlsError::NotTrained));
//!
//! let result = model.fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]);
//! assert_eq!(result, Err(OlsError::ZeroVarianceX));
//! ```
//!
//! ## Concurrent Use
//!
//! The plain estimator requires `&mut self` to train, so the borrow checker
//! already rules out torn reads. To share one estimator across threads, use
//! [`SharedOls`](prelude::SharedOls): writes (`fit`) are exclusive and reads
//! are shared, at the granularity of the whole coefficient pair.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (the shared adapter is std-only):
//!
//! ```toml
//! [dependencies]
//! olsfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and fitted-parameter data structures.
mod primitives;

// Layer 2: Algorithms - OLS accumulation and solving.
mod algorithms;

// Layer 3: Evaluation - fit-quality diagnostics.
mod evaluation;

// Layer 4: Engine - estimator, validation, and reporting.
mod engine;

// Layer 5: Adapters - shared access for concurrent callers.
mod adapters;

// High-level public API.
mod api;

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::SharedOls;
    pub use crate::api::{Coefficients, Diagnostics, FitReport, Ols, OlsError, OlsSolver};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
