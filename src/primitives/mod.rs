//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types shared by every other layer:
//! - The crate-wide error type (`PolytermError`)
//! - Dataset partition identifiers (`Subset`)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Model
//!   ↓
//! Layer 3: Regression
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error type.
pub mod errors;

/// Dataset partition identifiers.
pub mod subset;
