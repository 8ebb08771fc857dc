//! Symmetric rank-2 update `A = alpha*x*y^T + alpha*y*x^T + A`.

use strided_traits::RealScalar;
use strided_view::{resolve_offset, view_index_range, StridedError, StridedView};

use crate::error::ensure_nonzero;
use crate::layout::{Order, Uplo};
use crate::{BlasError, Result};

/// Validate that every `offset + i*stride1 + j*stride2`, `i, j < n`, lies in `[0, len)`.
fn validate_matrix(len: usize, n: usize, stride1: isize, stride2: isize, offset: usize) -> Result<()> {
    let Some((lo, hi)) = view_index_range(n, stride1, offset)? else {
        return Ok(());
    };
    let last = isize::try_from(n - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let span = stride2
        .checked_mul(last)
        .ok_or(StridedError::OffsetOverflow)?;
    let min = lo
        .checked_add(span.min(0))
        .ok_or(StridedError::OffsetOverflow)?;
    let max = hi
        .checked_add(span.max(0))
        .ok_or(StridedError::OffsetOverflow)?;
    if min < 0 || max as usize >= len {
        return Err(StridedError::OutOfBounds { min, max, len }.into());
    }
    Ok(())
}

fn syr2_impl<'a, F: RealScalar>(
    uplo: Uplo,
    n: usize,
    alpha: F,
    (x, stride_x, offset_x): (&[F], isize, usize),
    (y, stride_y, offset_y): (&[F], isize, usize),
    a: &'a mut [F],
    (stride_a1, stride_a2, offset_a): (isize, isize, usize),
) -> Result<&'a mut [F]> {
    let xv = StridedView::new(x, n, stride_x, offset_x)?;
    let yv = StridedView::new(y, n, stride_y, offset_y)?;
    validate_matrix(a.len(), n, stride_a1, stride_a2, offset_a)?;
    if n == 0 || alpha == F::zero() {
        return Ok(a);
    }
    let at = |i: usize, j: usize| {
        (offset_a as isize + i as isize * stride_a1 + j as isize * stride_a2) as usize
    };
    for j in 0..n {
        let (xj, yj) = (xv.get(j), yv.get(j));
        if xj == F::zero() && yj == F::zero() {
            continue;
        }
        let temp1 = alpha * yj;
        let temp2 = alpha * xj;
        for i in uplo.rows(n, j) {
            let k = at(i, j);
            a[k] = a[k] + xv.get(i) * temp1 + yv.get(i) * temp2;
        }
    }
    Ok(a)
}

fn syr2_conventional<'a, F: RealScalar>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: F,
    x: &[F],
    stride_x: isize,
    y: &[F],
    stride_y: isize,
    a: &'a mut [F],
    lda: usize,
) -> Result<&'a mut [F]> {
    ensure_nonzero(stride_x, "stride_x")?;
    ensure_nonzero(stride_y, "stride_y")?;
    let min = n.max(1);
    if lda < min {
        return Err(BlasError::InvalidLeadingDimension { lda, min });
    }
    let (sa1, sa2) = order.matrix_strides(lda);
    syr2_impl(
        uplo,
        n,
        alpha,
        (x, stride_x, resolve_offset(n, stride_x)),
        (y, stride_y, resolve_offset(n, stride_y)),
        a,
        (sa1, sa2, 0),
    )
}

fn syr2_strided<'a, F: RealScalar>(
    uplo: Uplo,
    n: usize,
    alpha: F,
    x: (&[F], isize, usize),
    y: (&[F], isize, usize),
    a: &'a mut [F],
    a_layout: (isize, isize, usize),
) -> Result<&'a mut [F]> {
    ensure_nonzero(x.1, "stride_x")?;
    ensure_nonzero(y.1, "stride_y")?;
    ensure_nonzero(a_layout.0, "stride_a1")?;
    ensure_nonzero(a_layout.1, "stride_a2")?;
    syr2_impl(uplo, n, alpha, x, y, a, a_layout)
}

/// Single-precision symmetric rank-2 update of a dense `n x n` matrix.
///
/// `a` is stored in `order` with leading dimension `lda`; only the `uplo`
/// triangle is read and written. Returns `a`.
pub fn ssyr2<'a>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: f32,
    x: &[f32],
    stride_x: isize,
    y: &[f32],
    stride_y: isize,
    a: &'a mut [f32],
    lda: usize,
) -> Result<&'a mut [f32]> {
    syr2_conventional(order, uplo, n, alpha, x, stride_x, y, stride_y, a, lda)
}

/// [`ssyr2`] with explicit offsets and independent matrix strides.
///
/// Element `(i, j)` of `A` lives at `offset_a + i*stride_a1 + j*stride_a2`.
pub fn ssyr2_ndarray<'a>(
    uplo: Uplo,
    n: usize,
    alpha: f32,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &[f32],
    stride_y: isize,
    offset_y: usize,
    a: &'a mut [f32],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
) -> Result<&'a mut [f32]> {
    syr2_strided(
        uplo,
        n,
        alpha,
        (x, stride_x, offset_x),
        (y, stride_y, offset_y),
        a,
        (stride_a1, stride_a2, offset_a),
    )
}

/// Double-precision counterpart of [`ssyr2`].
pub fn dsyr2<'a>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    stride_x: isize,
    y: &[f64],
    stride_y: isize,
    a: &'a mut [f64],
    lda: usize,
) -> Result<&'a mut [f64]> {
    syr2_conventional(order, uplo, n, alpha, x, stride_x, y, stride_y, a, lda)
}

/// Double-precision counterpart of [`ssyr2_ndarray`].
pub fn dsyr2_ndarray<'a>(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    stride_x: isize,
    offset_x: usize,
    y: &[f64],
    stride_y: isize,
    offset_y: usize,
    a: &'a mut [f64],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
) -> Result<&'a mut [f64]> {
    syr2_strided(
        uplo,
        n,
        alpha,
        (x, stride_x, offset_x),
        (y, stride_y, offset_y),
        a,
        (stride_a1, stride_a2, offset_a),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strided_traits::ErrorKind;

    #[test]
    fn test_dsyr2_column_major_upper() {
        let x = [1.0f64, 2.0];
        let y = [3.0f64, 4.0];
        let mut a = [0.0f64; 4];
        let a_ptr = a.as_ptr();
        let out = dsyr2(Order::ColMajor, Uplo::Upper, 2, 1.0, &x, 1, &y, 1, &mut a, 2).unwrap();
        assert!(std::ptr::eq(out.as_ptr(), a_ptr));
        // [a00, a10, a01, a11]; a10 is outside the upper triangle.
        assert_eq!(a, [6.0, 0.0, 10.0, 16.0]);
    }

    #[test]
    fn test_ssyr2_row_major_triangles() {
        let x = [1.0f32, 2.0];
        let y = [3.0f32, 4.0];
        let mut upper = [-1.0f32; 4];
        ssyr2(Order::RowMajor, Uplo::Upper, 2, 1.0, &x, 1, &y, 1, &mut upper, 2).unwrap();
        assert_eq!(upper, [5.0, 9.0, -1.0, 15.0]);

        let mut lower = [-1.0f32; 4];
        ssyr2(Order::RowMajor, Uplo::Lower, 2, 1.0, &x, 1, &y, 1, &mut lower, 2).unwrap();
        assert_eq!(lower, [5.0, -1.0, 9.0, 15.0]);
    }

    #[test]
    fn test_dsyr2_triangle_isolation_with_padding() {
        let n = 3;
        let lda = 4;
        let x = [1.0f64, -1.0, 2.0];
        let y = [0.5f64, 3.0, -2.0];
        for order in [Order::RowMajor, Order::ColMajor] {
            for uplo in [Uplo::Upper, Uplo::Lower] {
                let mut a: Vec<f64> = (0..n * lda).map(|k| 100.0 + k as f64).collect();
                let before = a.clone();
                dsyr2(order, uplo, n, 2.0, &x, 1, &y, 1, &mut a, lda).unwrap();
                let (s1, s2) = order.matrix_strides(lda);
                for (k, (&now, &was)) in a.iter().zip(&before).enumerate() {
                    let inside = (0..n).any(|i| {
                        (0..n).any(|j| uplo.contains(i, j) && (i as isize * s1 + j as isize * s2) as usize == k)
                    });
                    if !inside {
                        assert_eq!(now, was, "{order} {uplo}: element {k} changed");
                    }
                }
                for j in 0..n {
                    for i in uplo.rows(n, j) {
                        let k = (i as isize * s1 + j as isize * s2) as usize;
                        let expected = before[k] + x[i] * (2.0 * y[j]) + y[i] * (2.0 * x[j]);
                        assert_eq!(a[k], expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ndarray_matches_conventional() {
        let x = [1.0f64, 2.0, 3.0];
        let y = [-1.0f64, 0.5, 2.0];
        let mut a1 = [0.0f64; 9];
        let mut a2 = [0.0f64; 9];
        dsyr2(Order::RowMajor, Uplo::Lower, 3, 1.5, &x, -1, &y, 1, &mut a1, 3).unwrap();
        dsyr2_ndarray(Uplo::Lower, 3, 1.5, &x, -1, 2, &y, 1, 0, &mut a2, 3, 1, 0).unwrap();
        assert_eq!(a1, a2);
    }

    #[test]
    fn test_ndarray_negative_matrix_strides() {
        // Reversed rows and columns: (i, j) -> 8 - 3i - j.
        let x = [1.0f64, 2.0, 3.0];
        let y = [4.0f64, 5.0, 6.0];
        let mut a = [0.0f64; 9];
        let mut reference = [0.0f64; 9];
        dsyr2_ndarray(Uplo::Upper, 3, 1.0, &x, 1, 0, &y, 1, 0, &mut a, -3, -1, 8).unwrap();
        dsyr2(Order::RowMajor, Uplo::Upper, 3, 1.0, &x, 1, &y, 1, &mut reference, 3).unwrap();
        let mut flipped = reference;
        flipped.reverse();
        assert_eq!(a, flipped);
    }

    #[test]
    fn test_syr2_noop_cases() {
        let x = [1.0f32, 2.0];
        let mut a = [3.0f32; 4];
        ssyr2(Order::ColMajor, Uplo::Upper, 2, 0.0, &x, 1, &x, 1, &mut a, 2).unwrap();
        assert_eq!(a, [3.0; 4]);
        ssyr2(Order::ColMajor, Uplo::Upper, 0, 1.0, &x, 1, &x, 1, &mut a, 1).unwrap();
        assert_eq!(a, [3.0; 4]);
    }

    #[test]
    fn test_syr2_validation() {
        let x = [1.0f32, 2.0];
        let mut a = [3.0f32; 4];
        let e = ssyr2(Order::ColMajor, Uplo::Upper, 2, 1.0, &x, 0, &x, 1, &mut a, 2).unwrap_err();
        assert_eq!(e, BlasError::ZeroStride { arg: "stride_x" });
        let e = ssyr2(Order::ColMajor, Uplo::Upper, 2, 1.0, &x, 1, &x, 0, &mut a, 2).unwrap_err();
        assert_eq!(e, BlasError::ZeroStride { arg: "stride_y" });
        let e = ssyr2(Order::ColMajor, Uplo::Upper, 2, 1.0, &x, 1, &x, 1, &mut a, 1).unwrap_err();
        assert_eq!(e, BlasError::InvalidLeadingDimension { lda: 1, min: 2 });
        assert_eq!(e.kind(), ErrorKind::Range);
        let e = ssyr2(Order::ColMajor, Uplo::Upper, 0, 1.0, &x, 1, &x, 1, &mut a, 0).unwrap_err();
        assert_eq!(e, BlasError::InvalidLeadingDimension { lda: 0, min: 1 });
        let e = ssyr2_ndarray(Uplo::Lower, 2, 1.0, &x, 1, 0, &x, 1, 0, &mut a, 0, 1, 0).unwrap_err();
        assert_eq!(e, BlasError::ZeroStride { arg: "stride_a1" });
        let e = ssyr2_ndarray(Uplo::Lower, 2, 1.0, &x, 1, 0, &x, 1, 0, &mut a, 2, 0, 0).unwrap_err();
        assert_eq!(e, BlasError::ZeroStride { arg: "stride_a2" });
        let e = ssyr2_ndarray(Uplo::Lower, 2, 1.0, &x, 1, 0, &x, 1, 0, &mut a, 2, 1, 2).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Range);
        assert_eq!(a, [3.0; 4]);
    }
}
