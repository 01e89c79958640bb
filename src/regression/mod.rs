//! Layer 3: Regression
//!
//! # Purpose
//!
//! This layer turns a design matrix and response column into fitted
//! coefficients with the inference a model-search loop ranks candidates by.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Model
//!   ↓
//! Layer 3: Regression ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least squares with coefficient inference.
mod lstsq;

/// Re-exports
pub use lstsq::{lstsq, LstsqFit};
