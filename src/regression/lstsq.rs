//! Ordinary least squares with coefficient inference.
//!
//! ## Purpose
//!
//! This module fits `y = X * beta + e` by the normal equations and derives
//! the per-coefficient inference a model-search loop ranks candidate terms
//! by: t-statistics and two-sided p-values alongside the residual mean
//! squared error.
//!
//! ## Design notes
//!
//! * The solve is `(X'X)^-1 X'y` on the dense kernel. A rank-deficient or
//!   collinear design surfaces as `SingularMatrix` from the inversion, not
//!   as NaN contamination of downstream arithmetic.
//! * Systems without residual degrees of freedom (`rows <= cols`) are
//!   rejected up front; every p-value is computed against `rows - cols`
//!   degrees of freedom.
//!
//! ## Edge cases
//!
//! * An exact fit has `mse == 0`; nonzero coefficients then carry
//!   signed-infinite t-statistics and zero p-values, zero coefficients a
//!   zero t-statistic and p-value 1.

use num_traits::Float;

use crate::math::matrix::Matrix;
use crate::math::student::FloatStats;
use crate::primitives::errors::PolytermError;

// ============================================================================
// Fit Result
// ============================================================================

/// The solved system: coefficients with their inference columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LstsqFit<T> {
    /// Fitted coefficients, `k`-by-1.
    pub weights: Matrix<T>,

    /// Per-coefficient t-statistics, `k`-by-1.
    pub t: Matrix<T>,

    /// Per-coefficient two-sided p-values, `k`-by-1.
    pub pt: Matrix<T>,

    /// Residual mean squared error, `rss / (rows - cols)`.
    pub mse: T,
}

// ============================================================================
// Solver
// ============================================================================

/// Fit `y = x * beta + e` by ordinary least squares.
///
/// Fails with `DimensionMismatch` unless `y` is an `n`-by-1 column with
/// `n == x.rows()`, with `TooFewRows` when `n <= x.cols()`, and with
/// `SingularMatrix` when the design is rank-deficient.
pub fn lstsq<T: FloatStats>(x: &Matrix<T>, y: &Matrix<T>) -> Result<LstsqFit<T>, PolytermError> {
    let n = x.rows();
    let k = x.cols();

    // Check 1: y must be a response column for this design.
    if y.cols() != 1 || y.rows() != n {
        return Err(PolytermError::DimensionMismatch {
            op: "lstsq",
            lhs: x.shape(),
            rhs: y.shape(),
        });
    }

    // Check 2: residual degrees of freedom must exist.
    if n <= k {
        return Err(PolytermError::TooFewRows { rows: n, cols: k });
    }

    let xt = x.transpose();
    let xtx_inv = xt.multiply(x)?.inverse()?;
    let weights = xtx_inv.multiply(&xt)?.multiply(y)?;

    let fitted = x.multiply(&weights)?;
    let mut rss = T::zero();
    for i in 0..n {
        let e = y.get(i, 0) - fitted.get(i, 0);
        rss = rss + e * e;
    }

    let df = T::from(n - k).unwrap();
    let mse = rss / df;

    let mut t = Matrix::zeros(k, 1);
    let mut pt = Matrix::zeros(k, 1);
    for j in 0..k {
        let variance = mse * xtx_inv.get(j, j);
        let se = if variance > T::zero() {
            variance.sqrt()
        } else {
            T::zero()
        };

        let beta_j = weights.get(j, 0);
        let t_j = if se > T::zero() {
            beta_j / se
        } else if beta_j == T::zero() {
            T::zero()
        } else {
            beta_j.signum() * T::infinity()
        };

        t.set(j, 0, t_j);
        pt.set(j, 0, T::tail_two_sided(t_j, df));
    }

    Ok(LstsqFit { weights, t, pt, mse })
}
