//! Error types for term construction and matrix arithmetic.
//!
//! ## Purpose
//!
//! This module defines `PolytermError`, the single error type returned by
//! every fallible operation in the crate: malformed part triples, shape
//! violations in the matrix kernel, singular systems, and the
//! divide-by-zero hazard of negative exponents.
//!
//! ## Design notes
//!
//! * **One enum**: callers match on a single type regardless of which layer
//!   produced the failure.
//! * **Self-describing**: every variant carries the numbers needed to
//!   reconstruct what went wrong; messages are stable and asserted by tests.
//! * **Leaf errors**: no variant wraps another error, so `source()` is
//!   always `None`.
//!
//! ## Non-goals
//!
//! * This module does not decide recovery policy. In particular, the
//!   fault-tolerant candidate-evaluation path wraps these errors in
//!   `StatsFailure` rather than discarding them.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by term construction and the matrix kernel.
#[derive(Debug, Clone, PartialEq)]
pub enum PolytermError {
    /// A raw part had the wrong number of values (must be 2 or 3).
    PartArity {
        /// Number of values in the offending part.
        len: usize,
    },

    /// A raw part's column index or lag was not a non-negative integer.
    PartIndex {
        /// The offending value.
        value: f64,
    },

    /// A term was constructed from an empty parts list.
    EmptyTerm,

    /// Backing data length does not match the requested shape.
    DataLength {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Number of values actually supplied.
        got: usize,
    },

    /// Two operands have incompatible shapes for the attempted operation.
    DimensionMismatch {
        /// Name of the operation that failed.
        op: &'static str,
        /// Shape of the left operand.
        lhs: (usize, usize),
        /// Shape of the right operand (equals `lhs` for unary operations).
        rhs: (usize, usize),
    },

    /// A column index is outside the matrix.
    ColumnOutOfBounds {
        /// Requested column index.
        index: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },

    /// Gauss-Jordan elimination found no usable pivot.
    SingularMatrix {
        /// Side length of the matrix being inverted.
        size: usize,
    },

    /// A negative exponent was applied to a column whose range spans zero.
    DivideByZero {
        /// Index of the hazardous column.
        column: usize,
    },

    /// A least-squares system with no residual degrees of freedom.
    TooFewRows {
        /// Number of usable rows.
        rows: usize,
        /// Number of design columns.
        cols: usize,
    },
}

impl fmt::Display for PolytermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolytermError::PartArity { len } => write!(
                f,
                "Invalid part: got {} values, expected [column, exponent] or [column, exponent, lag]",
                len
            ),
            PolytermError::PartIndex { value } => {
                write!(f, "Invalid part: {} is not a non-negative integer", value)
            }
            PolytermError::EmptyTerm => write!(f, "A term requires at least one part"),
            PolytermError::DataLength { rows, cols, got } => write!(
                f,
                "Data length mismatch: a {}x{} matrix requires {} values, got {}",
                rows,
                cols,
                rows * cols,
                got
            ),
            PolytermError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "Dimension mismatch in {}: {}x{} vs {}x{}",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            PolytermError::ColumnOutOfBounds { index, cols } => write!(
                f,
                "Column {} out of bounds for a matrix with {} columns",
                index, cols
            ),
            PolytermError::SingularMatrix { size } => write!(
                f,
                "Singular matrix: no usable pivot during {}x{} inversion",
                size, size
            ),
            PolytermError::DivideByZero { column } => write!(
                f,
                "Divide by zero: negative exponent on column {} whose range spans zero",
                column
            ),
            PolytermError::TooFewRows { rows, cols } => write!(
                f,
                "Too few rows for least squares: {} rows, {} design columns",
                rows, cols
            ),
        }
    }
}

impl std::error::Error for PolytermError {}
