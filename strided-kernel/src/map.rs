//! Map operations on one-dimensional strided views.

use crate::{ensure_same_len, Lane, Result};
use strided_view::{Buffer, BufferMut, StridedView, StridedViewMut};

// ============================================================================
// Stride-specialized inner loop helpers
//
// When every lane has stride 1 we zip sub-slices so LLVM can drop the bounds
// checks and vectorize; otherwise we index through the lanes.
// ============================================================================

#[inline(always)]
fn inner_loop_map0<D: Copy>(dst: &mut [D], d: Lane, len: usize, f: &mut impl FnMut() -> D) {
    if d.unit() {
        for out in dst[d.span(len)].iter_mut() {
            *out = f();
        }
    } else {
        for i in 0..len {
            dst[d.at(i)] = f();
        }
    }
}

#[inline(always)]
fn inner_loop_map1<D: Copy, A: Copy>(
    dst: &mut [D],
    d: Lane,
    src: &[A],
    s: Lane,
    len: usize,
    f: &mut impl FnMut(A) -> D,
) {
    if d.unit() && s.unit() {
        for (out, &a) in dst[d.span(len)].iter_mut().zip(&src[s.span(len)]) {
            *out = f(a);
        }
    } else {
        for i in 0..len {
            dst[d.at(i)] = f(src[s.at(i)]);
        }
    }
}

#[inline(always)]
fn inner_loop_map2<D: Copy, A: Copy, B: Copy>(
    dst: &mut [D],
    d: Lane,
    (a, al): (&[A], Lane),
    (b, bl): (&[B], Lane),
    len: usize,
    f: &mut impl FnMut(A, B) -> D,
) {
    if d.unit() && al.unit() && bl.unit() {
        let a = &a[al.span(len)];
        let b = &b[bl.span(len)];
        for ((out, &x), &y) in dst[d.span(len)].iter_mut().zip(a).zip(b) {
            *out = f(x, y);
        }
    } else {
        for i in 0..len {
            dst[d.at(i)] = f(a[al.at(i)], b[bl.at(i)]);
        }
    }
}

#[inline(always)]
fn inner_loop_map3<D: Copy, A: Copy, B: Copy, C: Copy>(
    dst: &mut [D],
    d: Lane,
    (a, al): (&[A], Lane),
    (b, bl): (&[B], Lane),
    (c, cl): (&[C], Lane),
    len: usize,
    f: &mut impl FnMut(A, B, C) -> D,
) {
    if d.unit() && al.unit() && bl.unit() && cl.unit() {
        let a = &a[al.span(len)];
        let b = &b[bl.span(len)];
        let c = &c[cl.span(len)];
        for (((out, &x), &y), &z) in dst[d.span(len)].iter_mut().zip(a).zip(b).zip(c) {
            *out = f(x, y, z);
        }
    } else {
        for i in 0..len {
            dst[d.at(i)] = f(a[al.at(i)], b[bl.at(i)], c[cl.at(i)]);
        }
    }
}

#[inline(always)]
fn inner_loop_update2<X: Copy, Y: Copy>(
    x: &mut [X],
    xl: Lane,
    y: &mut [Y],
    yl: Lane,
    len: usize,
    f: &mut impl FnMut(X, Y) -> (X, Y),
) {
    if xl.unit() && yl.unit() {
        for (a, b) in x[xl.span(len)].iter_mut().zip(y[yl.span(len)].iter_mut()) {
            let (na, nb) = f(*a, *b);
            *a = na;
            *b = nb;
        }
    } else {
        for i in 0..len {
            let (ix, iy) = (xl.at(i), yl.at(i));
            let (na, nb) = f(x[ix], y[iy]);
            x[ix] = na;
            y[iy] = nb;
        }
    }
}

#[inline]
fn lane_of<B: Buffer + ?Sized>(v: &StridedView<'_, B>) -> Lane {
    Lane::new(v.offset(), v.stride())
}

#[inline]
fn lane_of_mut<B: BufferMut + ?Sized>(v: &StridedViewMut<'_, B>) -> Lane {
    Lane::new(v.offset(), v.stride())
}

// ============================================================================
// Public map operations
// ============================================================================

/// Fill: `dst[i] = f()` for each logical `i`, in increasing order.
pub fn nullary_into<D>(dst: &mut StridedViewMut<'_, D>, mut f: impl FnMut() -> D::Elem) -> Result<()>
where
    D: BufferMut + ?Sized,
{
    let len = dst.len();
    if len == 0 {
        return Ok(());
    }
    let d = lane_of_mut(dst);
    if let Some(out) = dst.buffer_mut().as_raw_mut() {
        tracing::trace!(len, path = "raw", "nullary_into");
        inner_loop_map0(out, d, len, &mut f);
        return Ok(());
    }
    tracing::trace!(len, path = "accessor", "nullary_into");
    for i in 0..len {
        dst.set(i, f());
    }
    Ok(())
}

/// Map: `dst[i] = f(src[i])`.
pub fn unary_into<D, A>(
    dst: &mut StridedViewMut<'_, D>,
    src: &StridedView<'_, A>,
    mut f: impl FnMut(A::Elem) -> D::Elem,
) -> Result<()>
where
    D: BufferMut + ?Sized,
    A: Buffer + ?Sized,
{
    ensure_same_len(dst.len(), src.len())?;
    let len = dst.len();
    if len == 0 {
        return Ok(());
    }
    let (d, s) = (lane_of_mut(dst), lane_of(src));
    if let (Some(out), Some(a)) = (dst.buffer_mut().as_raw_mut(), src.buffer().as_raw()) {
        tracing::trace!(len, path = "raw", "unary_into");
        inner_loop_map1(out, d, a, s, len, &mut f);
        return Ok(());
    }
    tracing::trace!(len, path = "accessor", "unary_into");
    for i in 0..len {
        let v = f(src.get(i));
        dst.set(i, v);
    }
    Ok(())
}

/// Binary map: `dst[i] = f(a[i], b[i])`.
pub fn binary_into<D, A, B>(
    dst: &mut StridedViewMut<'_, D>,
    a: &StridedView<'_, A>,
    b: &StridedView<'_, B>,
    mut f: impl FnMut(A::Elem, B::Elem) -> D::Elem,
) -> Result<()>
where
    D: BufferMut + ?Sized,
    A: Buffer + ?Sized,
    B: Buffer + ?Sized,
{
    ensure_same_len(dst.len(), a.len())?;
    ensure_same_len(dst.len(), b.len())?;
    let len = dst.len();
    if len == 0 {
        return Ok(());
    }
    let (d, al, bl) = (lane_of_mut(dst), lane_of(a), lane_of(b));
    if let (Some(out), Some(ra), Some(rb)) = (
        dst.buffer_mut().as_raw_mut(),
        a.buffer().as_raw(),
        b.buffer().as_raw(),
    ) {
        tracing::trace!(len, path = "raw", "binary_into");
        inner_loop_map2(out, d, (ra, al), (rb, bl), len, &mut f);
        return Ok(());
    }
    tracing::trace!(len, path = "accessor", "binary_into");
    for i in 0..len {
        let v = f(a.get(i), b.get(i));
        dst.set(i, v);
    }
    Ok(())
}

/// Ternary map: `dst[i] = f(a[i], b[i], c[i])`.
pub fn ternary_into<D, A, B, C>(
    dst: &mut StridedViewMut<'_, D>,
    a: &StridedView<'_, A>,
    b: &StridedView<'_, B>,
    c: &StridedView<'_, C>,
    mut f: impl FnMut(A::Elem, B::Elem, C::Elem) -> D::Elem,
) -> Result<()>
where
    D: BufferMut + ?Sized,
    A: Buffer + ?Sized,
    B: Buffer + ?Sized,
    C: Buffer + ?Sized,
{
    ensure_same_len(dst.len(), a.len())?;
    ensure_same_len(dst.len(), b.len())?;
    ensure_same_len(dst.len(), c.len())?;
    let len = dst.len();
    if len == 0 {
        return Ok(());
    }
    let (d, al, bl, cl) = (lane_of_mut(dst), lane_of(a), lane_of(b), lane_of(c));
    if let (Some(out), Some(ra), Some(rb), Some(rc)) = (
        dst.buffer_mut().as_raw_mut(),
        a.buffer().as_raw(),
        b.buffer().as_raw(),
        c.buffer().as_raw(),
    ) {
        tracing::trace!(len, path = "raw", "ternary_into");
        inner_loop_map3(out, d, (ra, al), (rb, bl), (rc, cl), len, &mut f);
        return Ok(());
    }
    tracing::trace!(len, path = "accessor", "ternary_into");
    for i in 0..len {
        let v = f(a.get(i), b.get(i), c.get(i));
        dst.set(i, v);
    }
    Ok(())
}

/// In-place two-output update: `(x[i], y[i]) = f(x[i], y[i])`.
///
/// Both outputs of step `i` are computed from the values before step `i`.
pub fn zip_update2<X, Y>(
    x: &mut StridedViewMut<'_, X>,
    y: &mut StridedViewMut<'_, Y>,
    mut f: impl FnMut(X::Elem, Y::Elem) -> (X::Elem, Y::Elem),
) -> Result<()>
where
    X: BufferMut + ?Sized,
    Y: BufferMut + ?Sized,
{
    ensure_same_len(x.len(), y.len())?;
    let len = x.len();
    if len == 0 {
        return Ok(());
    }
    let (xl, yl) = (lane_of_mut(x), lane_of_mut(y));
    if let (Some(rx), Some(ry)) = (x.buffer_mut().as_raw_mut(), y.buffer_mut().as_raw_mut()) {
        tracing::trace!(len, path = "raw", "zip_update2");
        inner_loop_update2(rx, xl, ry, yl, len, &mut f);
        return Ok(());
    }
    tracing::trace!(len, path = "accessor", "zip_update2");
    for i in 0..len {
        let (nx, ny) = f(x.get(i), y.get(i));
        x.set(i, nx);
        y.set(i, ny);
    }
    Ok(())
}
