//! Euclidean norm.
//!
//! The norm is accumulated as `scale * sqrt(ssq)` with the classical scaled
//! sum of squares, which avoids overflow and destructive underflow for
//! elements whose squares are not representable.

use num_complex::Complex;
use strided_kernel::fold;
use strided_traits::RealScalar;
use strided_view::{resolve_offset, Buffer, ComplexSlice, StridedView};

use crate::backend::{ActiveBackend, Nrm2Backend};
use crate::Result;

/// Running `(scale, ssq)` pair.
#[derive(Debug, Clone, Copy)]
struct ScaledSsq<F> {
    scale: F,
    ssq: F,
}

impl<F: RealScalar> ScaledSsq<F> {
    fn new() -> Self {
        Self {
            scale: F::zero(),
            ssq: F::one(),
        }
    }

    #[inline]
    fn push(mut self, v: F) -> Self {
        if v != F::zero() {
            let ax = v.abs();
            if self.scale < ax {
                let r = self.scale / ax;
                self.ssq = F::one() + self.ssq * r * r;
                self.scale = ax;
            } else {
                let r = ax / self.scale;
                self.ssq += r * r;
            }
        }
        self
    }

    #[inline]
    fn finish(self) -> F {
        self.scale * self.ssq.sqrt()
    }
}

/// Euclidean norm of `n` real elements of any buffer, with an explicit offset.
///
/// This is the portable implementation every backend falls back to.
pub fn gnrm2_ndarray<B, F>(n: usize, x: &B, stride: isize, offset: usize) -> Result<F>
where
    F: RealScalar,
    B: Buffer<Elem = F> + ?Sized,
{
    let xv = StridedView::new(x, n, stride, offset)?;
    Ok(fold(&xv, ScaledSsq::new(), ScaledSsq::push).finish())
}

fn complex_nrm2<F: RealScalar>(n: usize, x: &[F], stride: isize, offset: usize) -> Result<F> {
    let xs = ComplexSlice::new(x)?;
    let xv = StridedView::new(&xs, n, stride, offset)?;
    let acc = fold(&xv, ScaledSsq::new(), |acc, z: Complex<F>| acc.push(z.re).push(z.im));
    Ok(acc.finish())
}

/// Euclidean norm of a single-precision real vector.
///
/// # Example
///
/// ```rust
/// use strided_blas::snrm2;
///
/// let x = [3.0f32, 0.0, 4.0];
/// assert_eq!(snrm2(3, &x, 1).unwrap(), 5.0);
/// ```
pub fn snrm2(n: usize, x: &[f32], stride: isize) -> Result<f32> {
    ActiveBackend::snrm2(n, x, stride, resolve_offset(n, stride))
}

pub fn snrm2_ndarray(n: usize, x: &[f32], stride: isize, offset: usize) -> Result<f32> {
    ActiveBackend::snrm2(n, x, stride, offset)
}

/// Euclidean norm of a double-precision real vector.
pub fn dnrm2(n: usize, x: &[f64], stride: isize) -> Result<f64> {
    ActiveBackend::dnrm2(n, x, stride, resolve_offset(n, stride))
}

pub fn dnrm2_ndarray(n: usize, x: &[f64], stride: isize, offset: usize) -> Result<f64> {
    ActiveBackend::dnrm2(n, x, stride, offset)
}

/// Euclidean norm of a single-precision complex vector (interleaved `f32` pairs).
pub fn scnrm2(n: usize, cx: &[f32], stride: isize) -> Result<f32> {
    complex_nrm2(n, cx, stride, resolve_offset(n, stride))
}

pub fn scnrm2_ndarray(n: usize, cx: &[f32], stride: isize, offset: usize) -> Result<f32> {
    complex_nrm2(n, cx, stride, offset)
}

/// Euclidean norm of a double-precision complex vector (interleaved `f64` pairs).
pub fn dznrm2(n: usize, zx: &[f64], stride: isize) -> Result<f64> {
    complex_nrm2(n, zx, stride, resolve_offset(n, stride))
}

pub fn dznrm2_ndarray(n: usize, zx: &[f64], stride: isize, offset: usize) -> Result<f64> {
    complex_nrm2(n, zx, stride, offset)
}
