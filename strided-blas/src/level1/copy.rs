use strided_kernel::unary_into;
use strided_traits::RealScalar;
use strided_view::{
    resolve_offset, Buffer, BufferMut, ComplexSlice, ComplexSliceMut, StridedView, StridedViewMut,
};

use crate::Result;

/// Copy `n` elements of `x` into `y` using explicit offsets.
///
/// Works on any pair of buffers with the same element type, raw or accessor based.
/// Returns `y`.
pub fn gcopy_ndarray<'a, X, Y>(
    n: usize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'a mut Y,
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut Y>
where
    X: Buffer + ?Sized,
    Y: BufferMut<Elem = X::Elem> + ?Sized,
{
    let xv = StridedView::new(x, n, stride_x, offset_x)?;
    let mut yv = StridedViewMut::new(y, n, stride_y, offset_y)?;
    unary_into(&mut yv, &xv, |v| v)?;
    Ok(yv.into_inner())
}

/// Copy `n` elements of `x` into `y`; offsets are resolved from the stride signs.
pub fn gcopy<'a, X, Y>(
    n: usize,
    x: &X,
    stride_x: isize,
    y: &'a mut Y,
    stride_y: isize,
) -> Result<&'a mut Y>
where
    X: Buffer + ?Sized,
    Y: BufferMut<Elem = X::Elem> + ?Sized,
{
    gcopy_ndarray(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
    )
}

fn complex_copy<'a, F: RealScalar>(
    n: usize,
    x: &[F],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [F],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut [F]> {
    let xs = ComplexSlice::new(x)?;
    let mut ys = ComplexSliceMut::new(&mut *y)?;
    gcopy_ndarray(n, &xs, stride_x, offset_x, &mut ys, stride_y, offset_y)?;
    Ok(y)
}

/// Copy a single-precision complex vector stored as interleaved `f32` pairs.
///
/// Strides count complex elements. Returns `y`.
///
/// # Example
///
/// ```rust
/// use strided_blas::ccopy;
///
/// let x = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut y = [0.0f32; 6];
/// ccopy(3, &x, 1, &mut y, 1).unwrap();
/// assert_eq!(y, x);
/// ```
pub fn ccopy<'a>(
    n: usize,
    x: &[f32],
    stride_x: isize,
    y: &'a mut [f32],
    stride_y: isize,
) -> Result<&'a mut [f32]> {
    complex_copy(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
    )
}

/// [`ccopy`] with explicit offsets (in complex elements).
pub fn ccopy_ndarray<'a>(
    n: usize,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f32],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut [f32]> {
    complex_copy(n, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Double-precision counterpart of [`ccopy`].
pub fn zcopy<'a>(
    n: usize,
    x: &[f64],
    stride_x: isize,
    y: &'a mut [f64],
    stride_y: isize,
) -> Result<&'a mut [f64]> {
    complex_copy(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
    )
}

/// Double-precision counterpart of [`ccopy_ndarray`].
pub fn zcopy_ndarray<'a>(
    n: usize,
    x: &[f64],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f64],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut [f64]> {
    complex_copy(n, x, stride_x, offset_x, y, stride_y, offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlasError;
    use strided_view::StridedError;

    #[test]
    fn test_ccopy_returns_same_buffer() {
        let x = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [0.0f32; 6];
        let y_ptr = y.as_ptr();
        let out = ccopy(3, &x, 1, &mut y, 1).unwrap();
        assert!(std::ptr::eq(out.as_ptr(), y_ptr));
        assert_eq!(out, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_ccopy_negative_stride() {
        let x = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut y = [0.0f32; 8];
        ccopy(2, &x, 2, &mut y, -1).unwrap();
        // x picks complex elements 0 and 2; y walks backwards from element 1.
        assert_eq!(y, [5.0, 6.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_ccopy_ndarray_offsets() {
        let x = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [0.0f32; 6];
        ccopy_ndarray(2, &x, 1, 1, &mut y, -2, 2).unwrap();
        assert_eq!(y, [5.0, 6.0, 0.0, 0.0, 3.0, 4.0]);
    }

    #[test]
    fn test_ccopy_zero_n_is_noop() {
        let x = [1.0f32, 2.0];
        let mut y = [9.0f32, 9.0];
        ccopy(0, &x, 1, &mut y, 1).unwrap();
        assert_eq!(y, [9.0, 9.0]);
    }

    #[test]
    fn test_ccopy_rejects_short_buffer() {
        let x = [1.0f32, 2.0, 3.0, 4.0];
        let mut y = [0.0f32; 2];
        let err = ccopy(2, &x, 1, &mut y, 1).unwrap_err();
        assert!(matches!(
            err,
            BlasError::Strided(StridedError::OutOfBounds { .. })
        ));
        assert_eq!(y, [0.0, 0.0]);
    }

    #[test]
    fn test_zcopy_zero_stride_broadcasts() {
        let x = [7.0f64, -7.0];
        let mut y = [0.0f64; 6];
        zcopy(3, &x, 0, &mut y, 1).unwrap();
        assert_eq!(y, [7.0, -7.0, 7.0, -7.0, 7.0, -7.0]);
    }

    #[test]
    fn test_gcopy_raw() {
        let x = vec![1, 2, 3, 4];
        let mut y = vec![0; 4];
        gcopy(2, &x[..], -2, &mut y[..], 1).unwrap();
        assert_eq!(y, vec![3, 1, 0, 0]);
    }
}
