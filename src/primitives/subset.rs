//! Dataset partition identifiers.
//!
//! ## Purpose
//!
//! This module defines `Subset`, the closed enumeration of dataset
//! partitions a model exposes. Subsets name slices of the same underlying
//! table (training vs. validation vs. testing) and serve as the key domain
//! for per-term column caches.
//!
//! ## Design notes
//!
//! * **Closed domain**: caches are fixed-size arrays indexed by
//!   `Subset::index()`, so an "unknown subset" state is unrepresentable.
//! * **Explicit passing**: operations take a `Subset` argument; nothing in
//!   the crate reads an ambient default at call time. `Subset::default()`
//!   (`Training`) is the conventional partition for eager work done at term
//!   construction.

use core::fmt;

// ============================================================================
// Subset
// ============================================================================

/// A named partition of the underlying dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subset {
    /// Rows used to fit candidate terms (default).
    #[default]
    Training,

    /// Rows held out for model selection.
    Validation,

    /// Rows held out for final assessment.
    Testing,
}

impl Subset {
    /// Number of subsets; the length of every per-subset cache.
    pub const COUNT: usize = 3;

    /// All subsets, in `index()` order.
    pub const ALL: [Subset; Subset::COUNT] =
        [Subset::Training, Subset::Validation, Subset::Testing];

    /// Dense, stable cache index in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Subset::Training => 0,
            Subset::Validation => 1,
            Subset::Testing => 2,
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subset::Training => "training",
            Subset::Validation => "validation",
            Subset::Testing => "testing",
        };
        write!(f, "{}", name)
    }
}
