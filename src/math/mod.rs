//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks:
//! - The dense matrix kernel (`Matrix`)
//! - Student-t tail probabilities for inference (`FloatStats`)
//!
//! These are reusable mathematical pieces with no term- or model-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Model
//!   ↓
//! Layer 3: Regression
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dense matrix kernel.
pub mod matrix;

/// Student-t tail probabilities.
pub mod student;
