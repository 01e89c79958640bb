//! The collaborator contract of the owning regression model.
//!
//! ## Purpose
//!
//! This module defines `ModelView`, the narrow read-only interface through
//! which terms reach the model that owns the data: the raw input table, the
//! currently selected design matrix, the response column, and the highest
//! lag among selected terms.
//!
//! ## Design notes
//!
//! * Terms never hold a model pointer; every operation borrows a view for
//!   its own duration. Ownership, subset partitioning, and term selection
//!   stay entirely on the model's side of this trait.

use num_traits::Float;

use crate::math::matrix::Matrix;
use crate::primitives::subset::Subset;

// ============================================================================
// ModelView
// ============================================================================

/// Read-only view of the regression model that owns the dataset.
pub trait ModelView<T: Float> {
    /// The raw input table for `subset`, one column per input variable.
    fn data(&self, subset: Subset) -> &Matrix<T>;

    /// The current design matrix `X` for `subset`: one column per selected
    /// term.
    fn design(&self, subset: Subset) -> &Matrix<T>;

    /// The response column `y` for `subset`, `n`-by-1.
    fn response(&self, subset: Subset) -> &Matrix<T>;

    /// Highest lag among the model's currently selected terms.
    fn highest_lag(&self) -> usize;
}
