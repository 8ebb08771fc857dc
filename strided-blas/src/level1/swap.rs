use strided_kernel::zip_update2;
use strided_traits::RealScalar;
use strided_view::{resolve_offset, BufferMut, ComplexSliceMut, StridedViewMut};

use crate::Result;

/// Exchange `n` elements of `x` and `y` using explicit offsets. Returns `y`.
pub fn gswap_ndarray<'a, X, Y>(
    n: usize,
    x: &mut X,
    stride_x: isize,
    offset_x: usize,
    y: &'a mut Y,
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut Y>
where
    X: BufferMut + ?Sized,
    Y: BufferMut<Elem = X::Elem> + ?Sized,
{
    let mut xv = StridedViewMut::new(x, n, stride_x, offset_x)?;
    let mut yv = StridedViewMut::new(y, n, stride_y, offset_y)?;
    zip_update2(&mut xv, &mut yv, |a, b| (b, a))?;
    Ok(yv.into_inner())
}

/// Exchange `n` elements of `x` and `y`; offsets are resolved from the stride signs.
pub fn gswap<'a, X, Y>(
    n: usize,
    x: &mut X,
    stride_x: isize,
    y: &'a mut Y,
    stride_y: isize,
) -> Result<&'a mut Y>
where
    X: BufferMut + ?Sized,
    Y: BufferMut<Elem = X::Elem> + ?Sized,
{
    gswap_ndarray(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
    )
}

fn complex_swap<'a, F: RealScalar>(
    n: usize,
    x: &mut [F],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [F],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut [F]> {
    let mut xs = ComplexSliceMut::new(x)?;
    let mut ys = ComplexSliceMut::new(&mut *y)?;
    gswap_ndarray(n, &mut xs, stride_x, offset_x, &mut ys, stride_y, offset_y)?;
    Ok(y)
}

/// Exchange two single-precision complex vectors stored as interleaved `f32` pairs.
pub fn cswap<'a>(
    n: usize,
    x: &mut [f32],
    stride_x: isize,
    y: &'a mut [f32],
    stride_y: isize,
) -> Result<&'a mut [f32]> {
    complex_swap(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
    )
}

pub fn cswap_ndarray<'a>(
    n: usize,
    x: &mut [f32],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f32],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut [f32]> {
    complex_swap(n, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Double-precision counterpart of [`cswap`].
pub fn zswap<'a>(
    n: usize,
    x: &mut [f64],
    stride_x: isize,
    y: &'a mut [f64],
    stride_y: isize,
) -> Result<&'a mut [f64]> {
    complex_swap(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
    )
}

pub fn zswap_ndarray<'a>(
    n: usize,
    x: &mut [f64],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f64],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut [f64]> {
    complex_swap(n, x, stride_x, offset_x, y, stride_y, offset_y)
}
