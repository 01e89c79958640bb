//! Tests for the dense matrix kernel.
//!
//! ## Test Organization
//!
//! 1. **Construction** - shape/data validation and utility constructors
//! 2. **Arithmetic** - multiply, transpose, and their algebraic identities
//! 3. **Inversion** - Gauss-Jordan round trips, pivoting, singularity
//! 4. **Elementwise** - dot_multiply and dot_pow
//! 5. **Reshaping** - shift, hstack, rows_from, col
//! 6. **Display** - aligned rendering

use approx::assert_relative_eq;

use polyterm::prelude::*;

mod common;
use common::mat;

fn assert_matrix_eq(actual: &Matrix<f64>, expected: &Matrix<f64>, epsilon: f64) {
    assert_eq!(actual.shape(), expected.shape());
    for i in 0..actual.rows() {
        for j in 0..actual.cols() {
            assert_relative_eq!(actual.get(i, j), expected.get(i, j), epsilon = epsilon);
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_accepts_matching_data_length() {
    let m = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(0, 2), 3.0);
    assert_eq!(m.get(1, 0), 4.0);
}

#[test]
fn test_new_rejects_wrong_data_length() {
    let err = Matrix::new(2, 3, vec![1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        PolytermError::DataLength {
            rows: 2,
            cols: 3,
            got: 2
        }
    );
}

#[test]
fn test_zeros_filled_identity() {
    let z: Matrix<f64> = Matrix::zeros(2, 2);
    assert!(z.data().iter().all(|&v| v == 0.0));

    let f = Matrix::filled(3, 1, 4.5);
    assert!(f.data().iter().all(|&v| v == 4.5));

    let id: Matrix<f64> = Matrix::identity(3);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(id.get(i, j), if i == j { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_random_shape_and_range() {
    let r: Matrix<f64> = Matrix::random(4, 5);
    assert_eq!(r.shape(), (4, 5));
    assert!(r.data().iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_set_overwrites_entry() {
    let mut m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    m.set(1, 0, -9.0);
    assert_eq!(m.get(1, 0), -9.0);
    assert_eq!(m.get(0, 0), 1.0);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_multiply_known_product() {
    let a = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = mat(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    let product = a.multiply(&b).unwrap();
    assert_matrix_eq(&product, &mat(2, 2, &[58.0, 64.0, 139.0, 154.0]), 1e-12);
}

#[test]
fn test_multiply_rejects_mismatched_shapes() {
    let a = mat(2, 3, &[1.0; 6]);
    let b = mat(2, 2, &[1.0; 4]);
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err,
        PolytermError::DimensionMismatch {
            op: "multiply",
            lhs: (2, 3),
            rhs: (2, 2)
        }
    );
}

#[test]
fn test_multiply_identity_is_neutral() {
    let a = mat(3, 3, &[2.0, -1.0, 0.5, 3.0, 4.0, -2.0, 1.0, 0.0, 6.0]);
    let id = Matrix::identity(3);
    assert_matrix_eq(&a.multiply(&id).unwrap(), &a, 1e-12);
    assert_matrix_eq(&id.multiply(&a).unwrap(), &a, 1e-12);
}

#[test]
fn test_multiply_is_associative() {
    let a = mat(2, 3, &[0.5, 1.0, -2.0, 3.0, 0.25, 1.5]);
    let b = mat(3, 2, &[1.0, 2.0, -0.5, 4.0, 2.0, 0.0]);
    let c = mat(2, 2, &[3.0, -1.0, 0.5, 2.0]);

    let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
    let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
    assert_matrix_eq(&left, &right, 1e-12);
}

#[test]
fn test_transpose_swaps_axes_without_side_effects() {
    let a = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get(2, 0), 3.0);
    assert_eq!(t.get(2, 1), 6.0);

    // Receiver untouched; double transpose is the original.
    assert_eq!(a.get(0, 2), 3.0);
    assert_matrix_eq(&t.transpose(), &a, 0.0);
}

#[test]
fn test_transpose_of_product() {
    let a = mat(2, 3, &[1.0, 0.5, -1.0, 2.0, 3.0, 0.25]);
    let b = mat(3, 2, &[2.0, 1.0, -0.5, 0.0, 1.5, 4.0]);

    let left = a.multiply(&b).unwrap().transpose();
    let right = b.transpose().multiply(&a.transpose()).unwrap();
    assert_matrix_eq(&left, &right, 1e-12);
}

// ============================================================================
// Inversion
// ============================================================================

#[test]
fn test_inverse_known_2x2() {
    let a = mat(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    let inv = a.inverse().unwrap();
    assert_matrix_eq(&inv, &mat(2, 2, &[0.6, -0.7, -0.2, 0.4]), 1e-12);
}

#[test]
fn test_inverse_round_trips_to_identity() {
    let a = mat(3, 3, &[4.0, 2.0, 1.0, 2.0, 5.0, 3.0, 1.0, 3.0, 6.0]);
    let inv = a.inverse().unwrap();

    assert_matrix_eq(&a.multiply(&inv).unwrap(), &Matrix::identity(3), 1e-10);
    assert_matrix_eq(&inv.inverse().unwrap(), &a, 1e-10);
}

#[test]
fn test_inverse_uses_row_swaps_for_zero_pivot() {
    // Permutation matrix: its own inverse, unreachable without a swap.
    let a = mat(2, 2, &[0.0, 1.0, 1.0, 0.0]);
    let inv = a.inverse().unwrap();
    assert_matrix_eq(&inv, &a, 1e-12);

    let b = mat(3, 3, &[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    let binv = b.inverse().unwrap();
    assert_matrix_eq(&b.multiply(&binv).unwrap(), &Matrix::identity(3), 1e-12);
}

#[test]
fn test_inverse_reports_singular_matrix() {
    let a = mat(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    assert_eq!(
        a.inverse().unwrap_err(),
        PolytermError::SingularMatrix { size: 2 }
    );

    let zero: Matrix<f64> = Matrix::zeros(3, 3);
    assert_eq!(
        zero.inverse().unwrap_err(),
        PolytermError::SingularMatrix { size: 3 }
    );
}

#[test]
fn test_inverse_rejects_non_square() {
    let a = mat(2, 3, &[1.0; 6]);
    assert_eq!(
        a.inverse().unwrap_err(),
        PolytermError::DimensionMismatch {
            op: "inverse",
            lhs: (2, 3),
            rhs: (2, 3)
        }
    );
}

// ============================================================================
// Elementwise
// ============================================================================

#[test]
fn test_dot_multiply_values_and_shape_check() {
    let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let b = mat(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    assert_matrix_eq(
        &a.dot_multiply(&b).unwrap(),
        &mat(2, 2, &[5.0, 12.0, 21.0, 32.0]),
        1e-12,
    );

    let c = mat(1, 4, &[1.0; 4]);
    assert_eq!(
        a.dot_multiply(&c).unwrap_err(),
        PolytermError::DimensionMismatch {
            op: "dot_multiply",
            lhs: (2, 2),
            rhs: (1, 4)
        }
    );
}

#[test]
fn test_dot_pow_values() {
    let a = mat(1, 4, &[1.0, 2.0, 3.0, 4.0]);
    assert_matrix_eq(&a.dot_pow(2.0), &mat(1, 4, &[1.0, 4.0, 9.0, 16.0]), 1e-12);
    assert_matrix_eq(&a.dot_pow(-1.0), &mat(1, 4, &[1.0, 0.5, 1.0 / 3.0, 0.25]), 1e-12);
}

#[test]
fn test_dot_pow_zero_exponent_gives_ones() {
    // IEEE pow: x^0 == 1 for every x, including 0.
    let a = mat(1, 3, &[0.0, -5.0, 123.0]);
    assert_matrix_eq(&a.dot_pow(0.0), &mat(1, 3, &[1.0, 1.0, 1.0]), 0.0);
}

// ============================================================================
// Reshaping
// ============================================================================

#[test]
fn test_shift_moves_rows_down_and_zero_fills() {
    let col = mat(5, 1, &[10.0, 20.0, 30.0, 40.0, 50.0]);
    let shifted = col.shift(2);
    assert_matrix_eq(&shifted, &mat(5, 1, &[0.0, 0.0, 10.0, 20.0, 30.0]), 0.0);

    // Zero lag is a plain copy.
    assert_matrix_eq(&col.shift(0), &col, 0.0);

    // Lag beyond the row count leaves nothing.
    assert_matrix_eq(&col.shift(9), &Matrix::zeros(5, 1), 0.0);
}

#[test]
fn test_hstack_concatenates_columns() {
    let a = mat(2, 2, &[1.0, 2.0, 5.0, 6.0]);
    let b = mat(2, 1, &[9.0, 10.0]);
    let stacked = a.hstack(&b).unwrap();
    assert_matrix_eq(&stacked, &mat(2, 3, &[1.0, 2.0, 9.0, 5.0, 6.0, 10.0]), 0.0);
}

#[test]
fn test_hstack_rejects_mismatched_rows() {
    let a = mat(2, 2, &[1.0; 4]);
    let b = mat(3, 1, &[1.0; 3]);
    assert_eq!(
        a.hstack(&b).unwrap_err(),
        PolytermError::DimensionMismatch {
            op: "hstack",
            lhs: (2, 2),
            rhs: (3, 1)
        }
    );
}

#[test]
fn test_rows_from_slices_and_saturates() {
    let a = mat(4, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_matrix_eq(&a.rows_from(2), &mat(2, 2, &[5.0, 6.0, 7.0, 8.0]), 0.0);
    assert_matrix_eq(&a.rows_from(0), &a, 0.0);

    let empty = a.rows_from(10);
    assert_eq!(empty.shape(), (0, 2));
}

#[test]
fn test_col_extracts_column() {
    let a = mat(3, 2, &[1.0, 10.0, 2.0, 20.0, 3.0, 30.0]);
    assert_matrix_eq(&a.col(1).unwrap(), &mat(3, 1, &[10.0, 20.0, 30.0]), 0.0);

    assert_eq!(
        a.col(2).unwrap_err(),
        PolytermError::ColumnOutOfBounds { index: 2, cols: 2 }
    );
}

#[test]
fn test_min_max() {
    let a = mat(2, 2, &[3.0, -1.0, 0.5, 2.0]);
    assert_eq!(a.min(), -1.0);
    assert_eq!(a.max(), 3.0);
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_aligns_columns() {
    let a = mat(2, 2, &[1.0, 22.0, 333.0, 4.0]);
    assert_eq!(format!("{}", a), "  1 22\n333  4");
}
