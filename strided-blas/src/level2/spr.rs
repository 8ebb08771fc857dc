//! Packed symmetric rank-1 update `A = alpha*x*x^T + A`.

use strided_traits::RealScalar;
use strided_view::{resolve_offset, StridedView, StridedViewMut};

use crate::error::ensure_nonzero;
use crate::layout::{Order, Uplo};
use crate::packed::{packed_index, packed_len};
use crate::Result;

fn spr_impl<'a, F: RealScalar>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: F,
    x: &[F],
    stride_x: isize,
    offset_x: usize,
    ap: &'a mut [F],
    stride_ap: isize,
    offset_ap: usize,
) -> Result<&'a mut [F]> {
    ensure_nonzero(stride_x, "stride_x")?;
    ensure_nonzero(stride_ap, "stride_ap")?;
    let xv = StridedView::new(x, n, stride_x, offset_x)?;
    let mut apv = StridedViewMut::new(ap, packed_len(n), stride_ap, offset_ap)?;
    if n == 0 || alpha == F::zero() {
        return Ok(apv.into_inner());
    }
    for j in 0..n {
        let xj = xv.get(j);
        if xj == F::zero() {
            continue;
        }
        let temp = alpha * xj;
        for i in uplo.rows(n, j) {
            let k = packed_index(order, uplo, n, i, j);
            apv.set(k, apv.get(k) + xv.get(i) * temp);
        }
    }
    Ok(apv.into_inner())
}

/// Single-precision packed symmetric rank-1 update.
///
/// `ap` holds the `uplo` triangle of an `n x n` symmetric matrix packed in
/// `order`. Only that triangle is read and written. Returns `ap`.
pub fn sspr<'a>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: f32,
    x: &[f32],
    stride_x: isize,
    ap: &'a mut [f32],
) -> Result<&'a mut [f32]> {
    spr_impl(order, uplo, n, alpha, x, stride_x, resolve_offset(n, stride_x), ap, 1, 0)
}

/// [`sspr`] with explicit offsets and a stride for the packed array.
pub fn sspr_ndarray<'a>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: f32,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    ap: &'a mut [f32],
    stride_ap: isize,
    offset_ap: usize,
) -> Result<&'a mut [f32]> {
    spr_impl(order, uplo, n, alpha, x, stride_x, offset_x, ap, stride_ap, offset_ap)
}

/// Double-precision counterpart of [`sspr`].
pub fn dspr<'a>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    stride_x: isize,
    ap: &'a mut [f64],
) -> Result<&'a mut [f64]> {
    spr_impl(order, uplo, n, alpha, x, stride_x, resolve_offset(n, stride_x), ap, 1, 0)
}

pub fn dspr_ndarray<'a>(
    order: Order,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    stride_x: isize,
    offset_x: usize,
    ap: &'a mut [f64],
    stride_ap: isize,
    offset_ap: usize,
) -> Result<&'a mut [f64]> {
    spr_impl(order, uplo, n, alpha, x, stride_x, offset_x, ap, stride_ap, offset_ap)
}
