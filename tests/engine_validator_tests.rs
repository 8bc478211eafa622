#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the fail-fast checks applied to paired sample data:
//! emptiness, length agreement, and finiteness.

use olsfit::internals::engine::validator::Validator;
use olsfit::internals::primitives::errors::OlsError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test valid inputs pass.
#[test]
fn test_validate_inputs_ok() {
    let x = vec![1.0f64, 2.0, 3.0];
    let y = vec![4.0f64, 5.0, 6.0];

    assert!(Validator::validate_inputs(&x, &y).is_ok());
}

/// Test a single point passes validation.
///
/// Degenerate variance is the solver's concern, not the validator's.
#[test]
fn test_validate_inputs_single_point() {
    assert!(Validator::validate_inputs(&[1.0f64], &[2.0f64]).is_ok());
}

/// Test empty arrays are rejected.
#[test]
fn test_validate_inputs_empty() {
    assert_eq!(
        Validator::validate_inputs::<f64>(&[], &[]),
        Err(OlsError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_inputs(&[], &[1.0f64]),
        Err(OlsError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_inputs(&[1.0f64], &[]),
        Err(OlsError::EmptyInput)
    );
}

/// Test mismatched lengths are rejected with both lengths reported.
#[test]
fn test_validate_inputs_mismatched() {
    let x = vec![1.0f64, 2.0, 3.0];
    let y = vec![4.0f64, 5.0];

    assert_eq!(
        Validator::validate_inputs(&x, &y),
        Err(OlsError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
}

/// Test NaN values are rejected with index context.
#[test]
fn test_validate_inputs_nan() {
    let result = Validator::validate_inputs(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]);

    match result {
        Err(OlsError::InvalidNumericValue(msg)) => {
            assert!(msg.contains("x[1]"), "message should name the index: {msg}");
        }
        other => panic!("expected InvalidNumericValue, got {other:?}"),
    }
}

/// Test infinite values are rejected in either array.
#[test]
fn test_validate_inputs_infinite() {
    assert!(matches!(
        Validator::validate_inputs(&[1.0, f64::INFINITY], &[1.0, 2.0]),
        Err(OlsError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        Validator::validate_inputs(&[1.0, 2.0], &[f64::NEG_INFINITY, 2.0]),
        Err(OlsError::InvalidNumericValue(_))
    ));
}

/// Test validation is side-effect free and repeatable.
#[test]
fn test_validate_inputs_repeatable() {
    let x = vec![1.0f64, 2.0];
    let y = vec![3.0f64, 4.0];

    assert!(Validator::validate_inputs(&x, &y).is_ok());
    assert!(Validator::validate_inputs(&x, &y).is_ok());
    assert_eq!(x, vec![1.0, 2.0]);
    assert_eq!(y, vec![3.0, 4.0]);
}
