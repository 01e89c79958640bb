//! Dense matrix kernel.
//!
//! ## Purpose
//!
//! This module provides `Matrix<T>`, the dense, row-major matrix type every
//! term column and least-squares fit in the crate is built from. It covers
//! construction, transpose, the triple-loop product, Gauss-Jordan inversion,
//! elementwise power/multiply, column extraction, lag shifting, horizontal
//! stacking, and row slicing.
//!
//! ## Design notes
//!
//! * **Value semantics**: matrices are immutable after construction;
//!   operations return new matrices. The only in-place mutation happens on
//!   inversion's internal working copies, which never escape.
//! * **Shapes first**: every binary operation verifies shape compatibility
//!   before touching data and reports `DimensionMismatch` with the operation
//!   name and both shapes.
//! * **Pivot handling**: inversion compares each pivot *element* against
//!   `T::epsilon()`, swaps a usable row up from below when the pivot is
//!   numerically zero, and fails with `SingularMatrix` when the scan is
//!   exhausted.
//!
//! ## Key concepts
//!
//! * **Row-major layout**: entry `(i, j)` lives at `i * cols + j` in a flat
//!   backing vector of length `rows * cols`.
//! * **Lag shift**: `shift(lag)` moves every row down by `lag` positions.
//!   The vacated leading rows are zero-filled and are *not usable data*;
//!   callers align them away with `rows_from`.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` for every constructed matrix.
//! * No operation mutates its receiver.
//!
//! ## Non-goals
//!
//! * This module does not provide decompositions beyond Gauss-Jordan
//!   inversion; least-squares fitting lives in the regression layer.
//! * This module does not special-case sparse or banded structure.

use core::fmt;

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::primitives::errors::PolytermError;

// ============================================================================
// Matrix
// ============================================================================

/// A dense matrix with a flat, row-major backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Create a matrix from a row-major data vector.
    ///
    /// Fails with `DataLength` unless `data.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, PolytermError> {
        if data.len() != rows * cols {
            return Err(PolytermError::DataLength {
                rows,
                cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Create the `n`-by-`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            out.data[i * n + i] = T::one();
        }
        out
    }

    /// Create a matrix of uniform random entries in `[0, 1)`.
    pub fn random(rows: usize, cols: usize) -> Self
    where
        Standard: Distribution<T>,
    {
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols).map(|_| rng.gen::<T>()).collect();
        Self { rows, cols, data }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as a `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`. Indexing is a programming
    /// contract; shape errors driven by *data* are reported as `Result`s by
    /// the operations that hit them.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "matrix index out of range");
        self.data[i * self.cols + j]
    }

    /// Overwrite the entry at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "matrix index out of range");
        self.data[i * self.cols + j] = value;
    }

    /// The flat, row-major backing slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Smallest entry, or NaN for an empty matrix.
    pub fn min(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(T::nan(), |acc, v| if acc.is_nan() { v } else { acc.min(v) })
    }

    /// Largest entry, or NaN for an empty matrix.
    pub fn max(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(T::nan(), |acc, v| if acc.is_nan() { v } else { acc.max(v) })
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Matrix product `self * other`.
    ///
    /// Fails with `DimensionMismatch` unless `self.cols == other.rows`.
    pub fn multiply(&self, other: &Self) -> Result<Self, PolytermError> {
        if self.cols != other.rows {
            return Err(PolytermError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * other.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// Transpose; the receiver is untouched.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Elementwise product.
    ///
    /// Fails with `DimensionMismatch` unless both shapes are identical.
    pub fn dot_multiply(&self, other: &Self) -> Result<Self, PolytermError> {
        if self.shape() != other.shape() {
            return Err(PolytermError::DimensionMismatch {
                op: "dot_multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a * b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Elementwise power.
    pub fn dot_pow(&self, exponent: T) -> Self {
        let data = self.data.iter().map(|&v| v.powf(exponent)).collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Inverse of a square matrix via Gauss-Jordan elimination.
    ///
    /// Elimination runs simultaneously on a working copy of `self` and an
    /// identity twin. Walking the diagonal: a pivot whose magnitude is at
    /// most `T::epsilon()` triggers a downward scan of the pivot column for
    /// a usable row, which is swapped up in both matrices; if the scan is
    /// exhausted the matrix is singular. The pivot row is then normalized
    /// and the pivot column eliminated from every other row, again in both
    /// matrices. After the last pivot the identity twin holds the inverse.
    ///
    /// Fails with `DimensionMismatch` for non-square input and
    /// `SingularMatrix` when no usable pivot exists.
    pub fn inverse(&self) -> Result<Self, PolytermError> {
        if !self.is_square() {
            return Err(PolytermError::DimensionMismatch {
                op: "inverse",
                lhs: self.shape(),
                rhs: self.shape(),
            });
        }

        let n = self.rows;
        let mut work = self.clone();
        let mut twin = Self::identity(n);

        for i in 0..n {
            // Pivot selection: the element itself, not the whole buffer.
            if work.data[i * n + i].abs() <= T::epsilon() {
                let swap = ((i + 1)..n).find(|&k| work.data[k * n + i].abs() > T::epsilon());
                match swap {
                    Some(k) => {
                        work.swap_rows(i, k);
                        twin.swap_rows(i, k);
                    }
                    None => return Err(PolytermError::SingularMatrix { size: n }),
                }
            }

            let pivot = work.data[i * n + i];
            work.div_row(i, pivot);
            twin.div_row(i, pivot);

            for l in 0..n {
                if l == i {
                    continue;
                }
                let factor = work.data[l * n + i];
                if factor != T::zero() {
                    work.sub_scaled_row(l, i, factor);
                    twin.sub_scaled_row(l, i, factor);
                }
            }
        }

        Ok(twin)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    fn div_row(&mut self, row: usize, divisor: T) {
        for j in 0..self.cols {
            let idx = row * self.cols + j;
            self.data[idx] = self.data[idx] / divisor;
        }
    }

    fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for j in 0..self.cols {
            let t = target * self.cols + j;
            let s = source * self.cols + j;
            self.data[t] = self.data[t] - self.data[s] * factor;
        }
    }
}

// ============================================================================
// Reshaping
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Shift every row down by `lag` positions.
    ///
    /// The vacated leading `lag` rows are zero-filled and are unusable as
    /// data; callers must trim them with `rows_from` before consuming the
    /// result. A lag of zero returns an unchanged copy.
    pub fn shift(&self, lag: usize) -> Self {
        let mut out = Self::zeros(self.rows, self.cols);
        for i in lag..self.rows {
            let src = (i - lag) * self.cols;
            let dst = i * self.cols;
            out.data[dst..dst + self.cols].copy_from_slice(&self.data[src..src + self.cols]);
        }
        out
    }

    /// Horizontal concatenation `[self | other]`.
    ///
    /// Fails with `DimensionMismatch` unless the row counts match.
    pub fn hstack(&self, other: &Self) -> Result<Self, PolytermError> {
        if self.rows != other.rows {
            return Err(PolytermError::DimensionMismatch {
                op: "hstack",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
            data.extend_from_slice(&other.data[i * other.cols..(i + 1) * other.cols]);
        }
        Ok(Self {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Rows `k..rows` as a new matrix.
    ///
    /// Used to realign all columns of a design matrix after lag shifting.
    /// Saturates to an empty `0 x cols` matrix when `k >= rows`.
    pub fn rows_from(&self, k: usize) -> Self {
        let k = k.min(self.rows);
        Self {
            rows: self.rows - k,
            cols: self.cols,
            data: self.data[k * self.cols..].to_vec(),
        }
    }

    /// Column `j` as an `n`-by-1 matrix.
    ///
    /// Fails with `ColumnOutOfBounds` when `j >= cols`.
    pub fn col(&self, j: usize) -> Result<Self, PolytermError> {
        if j >= self.cols {
            return Err(PolytermError::ColumnOutOfBounds {
                index: j,
                cols: self.cols,
            });
        }

        let data = (0..self.rows).map(|i| self.data[i * self.cols + j]).collect();
        Ok(Self {
            rows: self.rows,
            cols: 1,
            data,
        })
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    /// Render as an aligned table, one matrix row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.data.iter().map(|v| format!("{}", v)).collect();

        let mut widths = vec![0usize; self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                widths[j] = widths[j].max(rendered[i * self.cols + j].len());
            }
        }

        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", rendered[i * self.cols + j], width = widths[j])?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
