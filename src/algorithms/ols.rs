//! Ordinary least squares fitting.
//!
//! ## Purpose
//!
//! This module provides the numerical core of the estimator:
//! - Generic and SIMD-optimized accumulation of the raw moment sums
//!   (Σx, Σy, Σx², Σxy) in a single pass over the data.
//! - A closed-form solver turning the accumulated sums into a
//!   slope/intercept pair.
//!
//! ## Key concepts
//!
//! * **Raw moments**: Sums are accumulated uncentered, then centered inside
//!   the solver (`Σ(x−x̄)² = Σx² − x̄·Σx`), keeping accumulation one-pass.
//! * **Degenerate data**: A centered denominator at or below the relative
//!   tolerance means the independent variable is constant; the solver
//!   refuses rather than emitting a zero or infinite slope.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::primitives::errors::OlsError;
use crate::primitives::params::Coefficients;

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of raw moment sums (generic Float).
///
/// Returns `(sum_x, sum_y, sum_xx, sum_xy)`.
#[inline]
pub fn accumulate_sums_scalar<T: Float>(x: &[T], y: &[T]) -> (T, T, T, T) {
    let n = x.len();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xx = T::zero();
    let mut sum_xy = T::zero();

    for i in 0..n {
        let x_val = x[i];
        let y_val = y[i];

        sum_x = sum_x + x_val;
        sum_y = sum_y + y_val;
        sum_xx = sum_xx + x_val * x_val;
        sum_xy = sum_xy + x_val * y_val;
    }

    (sum_x, sum_y, sum_xx, sum_xy)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized accumulation of raw moment sums (f64).
#[inline]
pub fn accumulate_sums_simd_f64(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64) {
    let n = x.len();

    let mut i = 0;
    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let x_val = f64x2::new([*x.get_unchecked(i), *x.get_unchecked(i + 1)]);
            let y_val = f64x2::new([*y.get_unchecked(i), *y.get_unchecked(i + 1)]);

            s_x += x_val;
            s_y += y_val;
            s_xx += x_val * x_val;
            s_xy += x_val * y_val;

            i += 2;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            a_x += x_val;
            a_y += y_val;
            a_xx += x_val * x_val;
            a_xy += x_val * y_val;

            i += 1;
        }
    }

    (a_x, a_y, a_xx, a_xy)
}

/// SIMD-optimized accumulation of raw moment sums (f32).
#[inline]
pub fn accumulate_sums_simd_f32(x: &[f32], y: &[f32]) -> (f32, f32, f32, f32) {
    let n = x.len();

    let mut i = 0;
    let mut s_x = f32x8::splat(0.0);
    let mut s_y = f32x8::splat(0.0);
    let mut s_xx = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let x_val = f32x8::new([
                *x.get_unchecked(i),
                *x.get_unchecked(i + 1),
                *x.get_unchecked(i + 2),
                *x.get_unchecked(i + 3),
                *x.get_unchecked(i + 4),
                *x.get_unchecked(i + 5),
                *x.get_unchecked(i + 6),
                *x.get_unchecked(i + 7),
            ]);
            let y_val = f32x8::new([
                *y.get_unchecked(i),
                *y.get_unchecked(i + 1),
                *y.get_unchecked(i + 2),
                *y.get_unchecked(i + 3),
                *y.get_unchecked(i + 4),
                *y.get_unchecked(i + 5),
                *y.get_unchecked(i + 6),
                *y.get_unchecked(i + 7),
            ]);

            s_x += x_val;
            s_y += y_val;
            s_xx += x_val * x_val;
            s_xy += x_val * y_val;

            i += 8;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let x_val = *x.get_unchecked(i);
            let y_val = *y.get_unchecked(i);

            a_x += x_val;
            a_y += y_val;
            a_xx += x_val * x_val;
            a_xy += x_val * y_val;

            i += 1;
        }
    }

    (a_x, a_y, a_xx, a_xy)
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific moment accumulation.
pub trait OlsSolver: Float {
    /// Accumulate raw moment sums over the sample set.
    #[inline]
    fn accumulate_sums(x: &[Self], y: &[Self]) -> (Self, Self, Self, Self) {
        accumulate_sums_scalar(x, y)
    }
}

impl OlsSolver for f64 {
    #[inline]
    fn accumulate_sums(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64) {
        accumulate_sums_simd_f64(x, y)
    }
}

impl OlsSolver for f32 {
    #[inline]
    fn accumulate_sums(x: &[f32], y: &[f32]) -> (f32, f32, f32, f32) {
        accumulate_sums_simd_f32(x, y)
    }
}

// ============================================================================
// Solving
// ============================================================================

/// Solve the normal equations from accumulated raw moment sums.
///
/// Computes the sample means, centers the second moments, and returns the
/// slope/intercept pair. Fails with [`OlsError::ZeroVarianceX`] when the
/// centered denominator `Σ(x−x̄)²` is zero within the relative tolerance,
/// i.e. all x-values are identical.
pub fn solve_ols<T: Float>(n: usize, sums: (T, T, T, T)) -> Result<Coefficients<T>, OlsError> {
    if n == 0 {
        return Err(OlsError::EmptyInput);
    }

    let (sum_x, sum_y, sum_xx, sum_xy) = sums;
    let n_t = T::from(n).unwrap_or(T::one());

    let x_mean = sum_x / n_t;
    let y_mean = sum_y / n_t;

    // Centered moments: Σ(x−x̄)² and Σ(x−x̄)(y−ȳ).
    let denominator = sum_xx - sum_x * x_mean;
    let numerator = sum_xy - sum_x * y_mean;

    // Relative tolerance absorbs rounding noise left by the centering step.
    let tol = sum_xx.abs().max(T::one()) * T::epsilon();
    if denominator <= tol {
        return Err(OlsError::ZeroVarianceX);
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    Ok(Coefficients { slope, intercept })
}
