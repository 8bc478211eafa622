//! OLS Fit and Predict Examples
//!
//! This example demonstrates the estimator's operations:
//! - Fitting a line and inspecting its coefficients
//! - Scalar and elementwise prediction
//! - Goodness-of-fit assessment with a full evaluation report
//! - Error handling for degenerate data and untrained models
//! - Retraining with new data
//! - Sharing one estimator across threads
//!
//! Each scenario includes the expected output as comments.

use olsfit::prelude::*;
use std::thread;

fn main() -> Result<(), OlsError> {
    println!("{}", "=".repeat(80));
    println!("OLS Simple Linear Regression - Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_fit()?;
    example_2_prediction()?;
    example_3_evaluation_report()?;
    example_4_error_handling()?;
    example_5_retraining()?;
    example_6_shared_across_threads()?;

    Ok(())
}

/// Example 1: Basic Fit
/// Fit a line through noiseless linear data and inspect the coefficients
fn example_1_basic_fit() -> Result<(), OlsError> {
    println!("Example 1: Basic Fit");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let mut model = Ols::new();
    model.fit(&x, &y)?;

    let params = model.parameters().expect("model is trained");
    println!("Slope:     {:.4}", params.slope);
    println!("Intercept: {:.4}", params.intercept);

    /* Expected Output:
    Slope:     2.0000
    Intercept: 0.0000
    */

    println!();
    Ok(())
}

/// Example 2: Prediction
/// Scalar and elementwise prediction with a trained model
fn example_2_prediction() -> Result<(), OlsError> {
    println!("Example 2: Prediction");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0];
    let y = vec![1.0, 2.0, 3.0];

    let mut model = Ols::new();
    model.fit(&x, &y)?;

    // Scalar in, scalar out
    let single = model.predict(10.0)?;
    println!("predict(10.0) = {:.2}", single);

    // Sequence in, sequence out (same order and length)
    let many = model.predict_slice(&[0.5, 1.5, 2.5])?;
    println!("predict_slice([0.5, 1.5, 2.5]) = {:?}", many);

    /* Expected Output:
    predict(10.0) = 10.00
    predict_slice([0.5, 1.5, 2.5]) = [0.5, 1.5, 2.5]
    */

    println!();
    Ok(())
}

/// Example 3: Evaluation Report
/// Full goodness-of-fit assessment against the training set
fn example_3_evaluation_report() -> Result<(), OlsError> {
    println!("Example 3: Evaluation Report");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.1, 3.9, 6.2, 7.8, 10.1];

    let mut model = Ols::new();
    model.fit(&x, &y)?;

    let report = model.evaluate(&x, &y)?;
    println!("{}", report);

    /* Expected Output:
    Summary:
      Data points: 5
      Slope:       1.990000
      Intercept:   0.050000

    Fit Diagnostics:
      MSE:  0.021400
      RMSE: 0.146287
      MAE:  0.136000
      R²:   0.997305

    Fitted Data:
           X            Y        Y_fit     Residual
    -----------------------------------------------
        1.00     2.100000     2.040000     0.060000
        2.00     3.900000     4.030000    -0.130000
        3.00     6.200000     6.020000     0.180000
        4.00     7.800000     8.010000    -0.210000
        5.00    10.100000    10.000000     0.100000
    */

    println!();
    Ok(())
}

/// Example 4: Error Handling
/// Degenerate data and out-of-order operation calls
fn example_4_error_handling() -> Result<(), OlsError> {
    println!("Example 4: Error Handling");
    println!("{}", "-".repeat(80));

    // Predicting before training fails
    let untrained: Ols<f64> = Ols::new();
    match untrained.predict(1.0) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("untrained predict: {}", e),
    }

    // A constant independent variable leaves the slope undefined
    let mut model = Ols::new();
    match model.fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("constant-x fit:    {}", e),
    }

    // A constant dependent variable is not an error: R² saturates to zero
    model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])?;
    let r2 = model.r_squared(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0])?;
    println!("constant-y R²:     {:.1}", r2);

    /* Expected Output:
    untrained predict: Model must be trained before generating predictions
    constant-x fit:    Cannot compute regression coefficients: variance in independent variable is zero
    constant-y R²:     0.0
    */

    println!();
    Ok(())
}

/// Example 5: Retraining
/// Refitting atomically replaces the coefficients; a failed refit does not
fn example_5_retraining() -> Result<(), OlsError> {
    println!("Example 5: Retraining");
    println!("{}", "-".repeat(80));

    let mut model = Ols::new();

    model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])?;
    let first = model.parameters().expect("trained");
    println!("first fit:  slope = {:.1}", first.slope);

    model.fit(&[1.0, 2.0, 3.0], &[3.0, 6.0, 9.0])?;
    let second = model.parameters().expect("trained");
    println!("second fit: slope = {:.1}", second.slope);

    // A failed refit leaves the previous coefficients in place
    let failed = model.fit(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]);
    let kept = model.parameters().expect("still trained");
    println!(
        "failed fit: {} (slope still {:.1})",
        failed.is_err(),
        kept.slope
    );

    /* Expected Output:
    first fit:  slope = 2.0
    second fit: slope = 3.0
    failed fit: true (slope still 3.0)
    */

    println!();
    Ok(())
}

/// Example 6: Shared Across Threads
/// One estimator, many concurrent readers
fn example_6_shared_across_threads() -> Result<(), OlsError> {
    println!("Example 6: Shared Across Threads");
    println!("{}", "-".repeat(80));

    let shared: SharedOls<f64> = SharedOls::new();
    shared.fit(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0])?;

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let reader = shared.clone();
            thread::spawn(move || reader.predict(i as f64))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let prediction = handle.join().expect("reader thread panicked")?;
        println!("predict({}.0) = {:.1}", i, prediction);
    }

    /* Expected Output:
    predict(0.0) = 1.0
    predict(1.0) = 3.0
    predict(2.0) = 5.0
    predict(3.0) = 7.0
    */

    println!();
    Ok(())
}
