//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides execution adapters around the estimator. The single
//! adapter here wraps it for shared access from concurrent callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shared-access adapter for concurrent callers.
#[cfg(feature = "std")]
pub mod shared;
