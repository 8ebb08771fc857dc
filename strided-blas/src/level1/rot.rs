//! Plane rotations.
//!
//! Every routine applies `x' = c*x + s*y`, `y' = c*y - s*x` element by element
//! (and, for complex vectors, component by component with real `c` and `s`).
//! Arithmetic is carried out in the precision of the element type.

use num_complex::Complex;
use strided_kernel::zip_update2;
use strided_traits::RealScalar;
use strided_view::{resolve_offset, BufferMut, ComplexSliceMut, StridedViewMut};

use crate::Result;

#[inline(always)]
fn rotate<F: RealScalar>(c: F, s: F, x: F, y: F) -> (F, F) {
    (c * x + s * y, c * y - s * x)
}

/// Apply a real plane rotation to any pair of real buffers. Returns `y`.
pub fn grot_ndarray<'a, X, Y, F>(
    n: usize,
    x: &mut X,
    stride_x: isize,
    offset_x: usize,
    y: &'a mut Y,
    stride_y: isize,
    offset_y: usize,
    c: F,
    s: F,
) -> Result<&'a mut Y>
where
    F: RealScalar,
    X: BufferMut<Elem = F> + ?Sized,
    Y: BufferMut<Elem = F> + ?Sized,
{
    let mut xv = StridedViewMut::new(x, n, stride_x, offset_x)?;
    let mut yv = StridedViewMut::new(y, n, stride_y, offset_y)?;
    zip_update2(&mut xv, &mut yv, |a, b| rotate(c, s, a, b))?;
    Ok(yv.into_inner())
}

fn complex_rot<'a, F: RealScalar>(
    n: usize,
    x: &mut [F],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [F],
    stride_y: isize,
    offset_y: usize,
    c: F,
    s: F,
) -> Result<&'a mut [F]> {
    let mut xs = ComplexSliceMut::new(x)?;
    let mut ys = ComplexSliceMut::new(&mut *y)?;
    {
        let mut xv = StridedViewMut::new(&mut xs, n, stride_x, offset_x)?;
        let mut yv = StridedViewMut::new(&mut ys, n, stride_y, offset_y)?;
        zip_update2(&mut xv, &mut yv, |a: Complex<F>, b: Complex<F>| {
            let (xr, yr) = rotate(c, s, a.re, b.re);
            let (xi, yi) = rotate(c, s, a.im, b.im);
            (Complex::new(xr, xi), Complex::new(yr, yi))
        })?;
    }
    Ok(y)
}

/// Apply a real plane rotation to two single-precision real vectors.
pub fn srot<'a>(
    n: usize,
    x: &mut [f32],
    stride_x: isize,
    y: &'a mut [f32],
    stride_y: isize,
    c: f32,
    s: f32,
) -> Result<&'a mut [f32]> {
    grot_ndarray(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
        c,
        s,
    )
}

pub fn srot_ndarray<'a>(
    n: usize,
    x: &mut [f32],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f32],
    stride_y: isize,
    offset_y: usize,
    c: f32,
    s: f32,
) -> Result<&'a mut [f32]> {
    grot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
}

/// Apply a real plane rotation to two double-precision real vectors.
pub fn drot<'a>(
    n: usize,
    x: &mut [f64],
    stride_x: isize,
    y: &'a mut [f64],
    stride_y: isize,
    c: f64,
    s: f64,
) -> Result<&'a mut [f64]> {
    grot_ndarray(
        n,
        x,
        stride_x,
        resolve_offset(n, stride_x),
        y,
        stride_y,
        resolve_offset(n, stride_y),
        c,
        s,
    )
}

pub fn drot_ndarray<'a>(
    n: usize,
    x: &mut [f64],
    stride_x: isize,
    offset_x: usize,
    y: &'a mut [f64],
    stride_y: isize,
    offset_y: usize,
    c: f64,
    s: f64,
) -> Result<&'a mut [f64]> {
    grot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
}

/// Apply a real plane rotation to two single-precision complex vectors
/// stored as interleaved `f32` pairs. Returns `cy`.
///
/// # Example
///
/// ```rust
/// use strided_blas::csrot;
///
/// let mut cx = [1.0f32, 2.0];
/// let mut cy = [0.0f32, 0.0];
/// csrot(1, &mut cx, 1, &mut cy, 1, 0.8, 0.6).unwrap();
/// assert!((cx[0] - 0.8).abs() < 1e-6 && (cx[1] - 1.6).abs() < 1e-6);
/// assert!((cy[0] + 0.6).abs() < 1e-6 && (cy[1] + 1.2).abs() < 1e-6);
/// ```
pub fn csrot<'a>(
    n: usize,
    cx: &mut [f32],
    stride_x: isize,
    cy: &'a mut [f32],
    stride_y: isize,
    c: f32,
    s: f32,
) -> Result<&'a mut [f32]> {
    complex_rot(
        n,
        cx,
        stride_x,
        resolve_offset(n, stride_x),
        cy,
        stride_y,
        resolve_offset(n, stride_y),
        c,
        s,
    )
}

pub fn csrot_ndarray<'a>(
    n: usize,
    cx: &mut [f32],
    stride_x: isize,
    offset_x: usize,
    cy: &'a mut [f32],
    stride_y: isize,
    offset_y: usize,
    c: f32,
    s: f32,
) -> Result<&'a mut [f32]> {
    complex_rot(n, cx, stride_x, offset_x, cy, stride_y, offset_y, c, s)
}

/// Double-precision counterpart of [`csrot`].
pub fn zdrot<'a>(
    n: usize,
    zx: &mut [f64],
    stride_x: isize,
    zy: &'a mut [f64],
    stride_y: isize,
    c: f64,
    s: f64,
) -> Result<&'a mut [f64]> {
    complex_rot(
        n,
        zx,
        stride_x,
        resolve_offset(n, stride_x),
        zy,
        stride_y,
        resolve_offset(n, stride_y),
        c,
        s,
    )
}

pub fn zdrot_ndarray<'a>(
    n: usize,
    zx: &mut [f64],
    stride_x: isize,
    offset_x: usize,
    zy: &'a mut [f64],
    stride_y: isize,
    offset_y: usize,
    c: f64,
    s: f64,
) -> Result<&'a mut [f64]> {
    complex_rot(n, zx, stride_x, offset_x, zy, stride_y, offset_y, c, s)
}
