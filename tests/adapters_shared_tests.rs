//! Tests for the shared concurrent-access adapter.
//!
//! These tests verify that one estimator shared across handles and threads
//! behaves like the plain estimator, and that readers always observe a
//! complete coefficient pair.
//!
//! ## Test Organization
//!
//! 1. **Handle Semantics** - Clones observe the same underlying estimator
//! 2. **Operations** - Parity with the plain estimator
//! 3. **Concurrency** - Readers never observe a torn pair

use std::thread;

use approx::assert_relative_eq;

use olsfit::prelude::*;

// ============================================================================
// Handle Semantics Tests
// ============================================================================

/// Test a fit through one handle is visible through its clones.
#[test]
fn test_clone_shares_state() {
    let shared: SharedOls<f64> = SharedOls::new();
    let clone = shared.clone();

    assert!(!clone.is_trained());

    shared
        .fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])
        .expect("fit should succeed");

    let params = clone.parameters().expect("clone should observe the fit");
    assert_relative_eq!(params.slope, 2.0, epsilon = 1e-12);
}

// ============================================================================
// Operations Tests
// ============================================================================

/// Test the shared handle exposes the full operation set.
#[test]
fn test_shared_operation_parity() {
    let shared: SharedOls<f64> = SharedOls::new();

    assert_eq!(shared.predict(1.0), Err(OlsError::NotTrained));
    assert!(shared.parameters().is_none());

    shared
        .fit(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0])
        .expect("fit should succeed");

    assert_relative_eq!(
        shared.predict(5.0).expect("predict should succeed"),
        11.0,
        epsilon = 1e-12
    );

    let outputs = shared
        .predict_slice(&[0.0, 1.0])
        .expect("predict should succeed");
    assert_eq!(outputs.len(), 2);

    let r2 = shared
        .r_squared(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0])
        .expect("r_squared should succeed");
    assert_relative_eq!(r2, 1.0, epsilon = 1e-12);

    let report = shared
        .evaluate(&[1.0, 2.0], &[3.0, 5.0])
        .expect("evaluate should succeed");
    assert_eq!(report.observations(), 2);
}

/// Test a failed refit through the shared handle preserves state.
#[test]
fn test_shared_failed_refit_preserves_state() {
    let shared: SharedOls<f64> = SharedOls::new();
    shared
        .fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])
        .expect("fit should succeed");

    let result = shared.fit(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]);
    assert_eq!(result, Err(OlsError::ZeroVarianceX));

    let kept = shared.parameters().expect("still trained");
    assert_relative_eq!(kept.slope, 2.0, epsilon = 1e-12);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Test readers always observe a complete coefficient pair.
///
/// A writer alternates between two lines whose slope and intercept identify
/// each other (y = 2x and y = -2x + 10). Any slope/intercept combination
/// outside those two pairs would mean a torn read.
#[test]
fn test_readers_never_observe_torn_pair() {
    let shared: SharedOls<f64> = SharedOls::new();
    shared
        .fit(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0])
        .expect("fit should succeed");

    let writer = {
        let handle = shared.clone();
        thread::spawn(move || {
            for i in 0..500 {
                if i % 2 == 0 {
                    // y = -2x + 10
                    handle
                        .fit(&[0.0, 1.0, 2.0], &[10.0, 8.0, 6.0])
                        .expect("fit should succeed");
                } else {
                    // y = 2x
                    handle
                        .fit(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0])
                        .expect("fit should succeed");
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = shared.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let params = handle.parameters().expect("trained");
                    let consistent = (params.slope == 2.0 && params.intercept == 0.0)
                        || (params.slope == -2.0 && params.intercept == 10.0);
                    assert!(
                        consistent,
                        "observed torn pair: slope={}, intercept={}",
                        params.slope, params.intercept
                    );
                }
            })
        })
        .collect();

    writer.join().expect("writer thread panicked");
    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
}

/// Test concurrent readers agree on predictions between refits.
#[test]
fn test_concurrent_readers() {
    let shared: SharedOls<f64> = SharedOls::new();
    shared
        .fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])
        .expect("fit should succeed");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let reader = shared.clone();
            thread::spawn(move || reader.predict(i as f64).expect("predict should succeed"))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let prediction = handle.join().expect("reader thread panicked");
        assert_relative_eq!(prediction, 2.0 * i as f64, epsilon = 1e-12);
    }
}
