//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures shared throughout the
//! crate: error types and the fitted-parameter representation. It has zero
//! internal dependencies within the crate.
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
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Fitted coefficients and training state.
pub mod params;
