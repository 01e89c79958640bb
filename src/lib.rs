//! # polyterm — candidate regression terms for automated model search
//!
//! A small, self-contained engine for building and evaluating candidate
//! regression terms — products of input columns raised to exponents with
//! optional time lags, such as `x^2 * y[t-1]` — over tabular and
//! time-series data.
//!
//! ## What it provides
//!
//! Two tightly coupled pieces carry all the work:
//!
//! - **[`Matrix`](prelude::Matrix)** — a dense, row-major matrix kernel:
//!   construction, transpose, triple-loop multiply, Gauss-Jordan inversion,
//!   elementwise power/multiply, column extraction, lag shifting,
//!   horizontal stacking, and row slicing.
//! - **[`Term`](prelude::Term)** — an immutable list of
//!   `(column, exponent, lag)` parts with a canonical, order-independent
//!   content digest for deduplication, a lazily filled per-subset column
//!   cache, and a least-squares path that reports the coefficient,
//!   t-statistic, and p-value the term would contribute if added to the
//!   owning model.
//!
//! The owning model itself stays outside the crate: terms reach it through
//! the read-only [`ModelView`](prelude::ModelView) trait (raw data table,
//! current design matrix, response column, highest selected lag).
//!
//! ## Quick start
//!
//! ```rust
//! use polyterm::prelude::*;
//!
//! // A minimal model view over one table: column 1 holds the input x,
//! // the current design matrix is an intercept column, and the response
//! // is 2 * x^2.
//! struct Table {
//!     data: Matrix<f64>,
//!     design: Matrix<f64>,
//!     response: Matrix<f64>,
//! }
//!
//! impl ModelView<f64> for Table {
//!     fn data(&self, _subset: Subset) -> &Matrix<f64> {
//!         &self.data
//!     }
//!     fn design(&self, _subset: Subset) -> &Matrix<f64> {
//!         &self.design
//!     }
//!     fn response(&self, _subset: Subset) -> &Matrix<f64> {
//!         &self.response
//!     }
//!     fn highest_lag(&self) -> usize {
//!         0
//!     }
//! }
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let table = Table {
//!     data: Matrix::new(5, 2, vec![
//!         1.0, 1.0,
//!         1.0, 2.0,
//!         1.0, 3.0,
//!         1.0, 4.0,
//!         1.0, 5.0,
//!     ])?,
//!     design: Matrix::filled(5, 1, 1.0),
//!     response: Matrix::new(5, 1, x.iter().map(|v| 2.0 * v * v).collect())?,
//! };
//!
//! // The candidate term x1^2.
//! let term = Term::new(&table, vec![TermPart::new(1, 2.0)])?;
//! assert!(term.is_usable());
//!
//! // Statistics of the model refit with this term appended.
//! let stats = term.stats(&table, Subset::Training).expect("well-posed fit");
//! assert!((stats.coeff - 2.0).abs() < 1e-8);
//! # Ok::<(), PolytermError>(())
//! ```
//!
//! ## Term identity
//!
//! Two terms with the same parts in different order are the same term:
//! equality and hashing go through a canonical SHA-256 digest computed by
//! hashing each part independently, sorting the per-part digests, and
//! hashing the sorted sequence. Any differing triple — even by lag alone —
//! changes the digest. Digests are stable across process runs, so their
//! fixed-length hex rendering doubles as a persistent cache key.
//!
//! ## Subsets and caching
//!
//! Data partitions form the closed [`Subset`](prelude::Subset) enumeration
//! (training, validation, testing). Each term caches its materialized
//! column once per subset; `clear_cache` drops all slots when the model's
//! data changes. Subsets are always passed explicitly — nothing reads an
//! ambient default at call time.
//!
//! ## Failure behavior
//!
//! All kernel and term operations return
//! [`PolytermError`](prelude::PolytermError) values; nothing panics on bad
//! data. Two policies sit on top:
//!
//! - Construction eagerly materializes the default-subset column and
//!   records the outcome in an explicit
//!   [`Materialization`](prelude::Materialization) status instead of
//!   failing or silently absorbing the error.
//! - [`Term::stats`](prelude::Term::stats) converts every underlying
//!   failure into a typed [`StatsFailure`](prelude::StatsFailure) carrying
//!   the term's parts and the subset, so a search loop evaluating hundreds
//!   of candidates skips unusable ones without aborting — and without a
//!   bare NaN masquerading as a result.
//!
//! ## Lag alignment
//!
//! A lag-shifted column has no data for its leading rows. Design and
//! response matrices are therefore row-sliced from
//! `max(model.highest_lag(), term.lag())` before fitting, so every column —
//! lagged or not — covers the same usable row range.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and subset identifiers.
mod primitives;

// Layer 2: Math - the dense matrix kernel and Student-t tails.
mod math;

// Layer 3: Regression - least squares with coefficient inference.
mod regression;

// Layer 4: Model - terms, canonical identity, and the model contract.
mod model;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyterm prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the commonly used types:
///
/// ```
/// use polyterm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::math::matrix::Matrix;
    pub use crate::math::student::FloatStats;
    pub use crate::model::digest::TermDigest;
    pub use crate::model::term::{Materialization, StatsFailure, Term, TermPart, TermStats};
    pub use crate::model::view::ModelView;
    pub use crate::primitives::errors::PolytermError;
    pub use crate::primitives::subset::Subset;
    pub use crate::regression::{lstsq, LstsqFit};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled. These are implementation
/// details and may change without notice; do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math modules.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal regression modules.
    pub mod regression {
        pub use crate::regression::*;
    }
    /// Internal model modules.
    pub mod model {
        pub use crate::model::*;
    }
}
