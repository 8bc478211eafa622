//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core ordinary least squares computation:
//! single-pass accumulation of raw moment sums (scalar and SIMD-optimized)
//! and the closed-form solver for the slope/intercept pair.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least squares accumulation and solving.
pub mod ols;
