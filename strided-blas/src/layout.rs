//! Storage order and triangle selectors.

use std::fmt;
use std::str::FromStr;

use crate::BlasError;

/// Matrix storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Row-major (C-style): consecutive elements of a row are adjacent.
    RowMajor,
    /// Column-major (Fortran-style): consecutive elements of a column are adjacent.
    ColMajor,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::RowMajor => "row-major",
            Order::ColMajor => "column-major",
        }
    }

    /// `(row stride, column stride)` of a dense matrix with leading dimension `lda`.
    #[inline]
    pub fn matrix_strides(self, lda: usize) -> (isize, isize) {
        let lda = isize::try_from(lda).unwrap_or(isize::MAX);
        match self {
            Order::RowMajor => (lda, 1),
            Order::ColMajor => (1, lda),
        }
    }
}

impl FromStr for Order {
    type Err = BlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row-major" => Ok(Order::RowMajor),
            "column-major" => Ok(Order::ColMajor),
            other => Err(BlasError::InvalidOrder(other.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which triangle of a symmetric matrix is referenced and updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
    Upper,
    Lower,
}

impl Uplo {
    pub fn as_str(self) -> &'static str {
        match self {
            Uplo::Upper => "upper",
            Uplo::Lower => "lower",
        }
    }

    /// Row indices `i` of column `j` inside the selected triangle of an `n x n` matrix.
    #[inline]
    pub fn rows(self, n: usize, j: usize) -> std::ops::Range<usize> {
        match self {
            Uplo::Upper => 0..j + 1,
            Uplo::Lower => j..n,
        }
    }

    /// Whether `(i, j)` lies in the selected triangle (diagonal included).
    #[inline]
    pub fn contains(self, i: usize, j: usize) -> bool {
        match self {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        }
    }
}

impl FromStr for Uplo {
    type Err = BlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(Uplo::Upper),
            "lower" => Ok(Uplo::Lower),
            other => Err(BlasError::InvalidUplo(other.to_string())),
        }
    }
}

impl fmt::Display for Uplo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
