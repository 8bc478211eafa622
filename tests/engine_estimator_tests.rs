#![cfg(feature = "dev")]
//! Tests for the estimator's internal state machine.
//!
//! These tests verify the Untrained/Trained transitions and the atomicity
//! of coefficient updates through the internals surface.

use approx::assert_relative_eq;

use olsfit::internals::engine::estimator::Ols;
use olsfit::internals::primitives::errors::OlsError;
use olsfit::internals::primitives::params::{Coefficients, ModelState};

// ============================================================================
// Model State Tests
// ============================================================================

/// Test the default state is Untrained and carries no coefficients.
#[test]
fn test_state_default_untrained() {
    let state: ModelState<f64> = ModelState::default();

    assert_eq!(state, ModelState::Untrained);
    assert!(state.coefficients().is_none());
    assert!(!state.is_trained());
}

/// Test a Trained state always exposes the complete pair.
#[test]
fn test_state_trained_pair() {
    let state = ModelState::Trained(Coefficients {
        slope: 2.0f64,
        intercept: -1.0,
    });

    let pair = state.coefficients().expect("trained state carries the pair");
    assert_relative_eq!(pair.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(pair.intercept, -1.0, epsilon = 1e-12);
    assert!(state.is_trained());
}

/// Test coefficient prediction arithmetic.
#[test]
fn test_coefficients_predict() {
    let pair = Coefficients {
        slope: 1.5f64,
        intercept: 2.0,
    };

    assert_relative_eq!(pair.predict(0.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(pair.predict(2.0), 5.0, epsilon = 1e-12);
    assert_relative_eq!(pair.predict(-2.0), -1.0, epsilon = 1e-12);
}

// ============================================================================
// Transition Tests
// ============================================================================

/// Test the Untrained → Trained transition happens only on success.
#[test]
fn test_transition_on_success_only() {
    let mut model: Ols<f64> = Ols::new();
    assert!(!model.is_trained());

    // A failed fit does not transition
    let _ = model.fit(&[1.0, 1.0], &[1.0, 2.0]);
    assert!(!model.is_trained());

    // A successful fit does
    model
        .fit(&[1.0, 2.0], &[1.0, 2.0])
        .expect("fit should succeed");
    assert!(model.is_trained());
}

/// Test a trained estimator survives every failing fit unchanged.
///
/// Each failure mode (empty, mismatched, non-finite, zero variance) must
/// leave the previously stored pair observable.
#[test]
fn test_trained_state_survives_all_failures() {
    let mut model = Ols::new();
    model
        .fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])
        .expect("fit should succeed");
    let expected = model.parameters().expect("trained");

    let failures: [(&[f64], &[f64]); 4] = [
        (&[], &[]),
        (&[1.0, 2.0], &[1.0]),
        (&[1.0, f64::NAN], &[1.0, 2.0]),
        (&[4.0, 4.0], &[1.0, 2.0]),
    ];

    for (x, y) in failures {
        assert!(model.fit(x, y).is_err());
        assert_eq!(model.parameters(), Some(expected));
    }
}

/// Test evaluate requires the Trained state.
#[test]
fn test_evaluate_untrained() {
    let model: Ols<f64> = Ols::new();

    assert!(matches!(
        model.evaluate(&[1.0, 2.0], &[1.0, 2.0]),
        Err(OlsError::NotTrained)
    ));
}

/// Test the estimator retains no training data.
///
/// Assessment against a fresh sample pair must depend only on the stored
/// scalars, not on anything remembered from the training call.
#[test]
fn test_no_training_data_retained() {
    let mut model = Ols::new();
    let x_train = vec![1.0, 2.0, 3.0];
    let y_train = vec![2.0, 4.0, 6.0];
    model.fit(&x_train, &y_train).expect("fit should succeed");
    drop((x_train, y_train));

    let report = model
        .evaluate(&[5.0, 6.0], &[10.0, 12.0])
        .expect("evaluate should succeed");

    assert_eq!(report.observations(), 2);
    assert_relative_eq!(report.fitted[0], 10.0, epsilon = 1e-12);
    assert_relative_eq!(report.fitted[1], 12.0, epsilon = 1e-12);
}
