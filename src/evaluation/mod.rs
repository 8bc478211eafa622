//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit quality assessment: residual-based error
//! metrics and the coefficient of determination.
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
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit diagnostics.
pub mod diagnostics;
