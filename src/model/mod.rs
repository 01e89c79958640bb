//! Layer 4: Model
//!
//! # Purpose
//!
//! This layer holds the domain objects of candidate-term evaluation:
//! - The collaborator contract of the owning model (`ModelView`)
//! - Canonical term identity (`TermDigest`)
//! - The terms themselves (`Term`, `TermPart`, `TermStats`)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Model ← You are here
//!   ↓
//! Layer 3: Regression
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Canonical term identity.
pub mod digest;

/// Candidate regression terms.
pub mod term;

/// The owning model's read-only contract.
pub mod view;
