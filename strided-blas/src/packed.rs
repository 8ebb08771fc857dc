//! Packed storage of one triangle of a symmetric matrix.

use crate::layout::{Order, Uplo};

/// Number of stored elements for an `n x n` packed triangle.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Index of element `(i, j)` inside a packed triangle of an `n x n` matrix.
///
/// `(i, j)` must lie in the triangle selected by `uplo`. Row-major upper
/// storage is column-major lower storage of the transpose and vice versa.
#[inline]
pub fn packed_index(order: Order, uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    debug_assert!(uplo.contains(i, j) && i < n && j < n);
    match (order, uplo) {
        (Order::ColMajor, Uplo::Upper) => i + j * (j + 1) / 2,
        (Order::ColMajor, Uplo::Lower) => i + j * (2 * n - j - 1) / 2,
        (Order::RowMajor, Uplo::Upper) => j + i * (2 * n - i - 1) / 2,
        (Order::RowMajor, Uplo::Lower) => j + i * (i + 1) / 2,
    }
}
