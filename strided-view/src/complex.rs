//! Interleaved complex storage.
//!
//! Complex vectors are stored as `[re0, im0, re1, im1, ...]`. The wrappers in
//! this module present such a slice as a buffer of `Complex<F>` whose logical
//! index `i` lives in physical slots `2*i` and `2*i + 1`. Strides and offsets
//! of views built on top of them count complex elements, not components.

use bytemuck::Pod;
use num_complex::Complex;

use crate::accessor::{Buffer, BufferMut};
use crate::{Result, StridedError};

// ============================================================================
// Zero-copy casts
// ============================================================================

/// Reinterpret `[Complex<F>]` as interleaved `[F]`.
#[inline]
pub fn as_interleaved<F: Pod>(src: &[Complex<F>]) -> &[F] {
    bytemuck::cast_slice(src)
}

/// Mutable variant of [`as_interleaved`].
#[inline]
pub fn as_interleaved_mut<F: Pod>(src: &mut [Complex<F>]) -> &mut [F] {
    bytemuck::cast_slice_mut(src)
}

/// Reinterpret interleaved `[F]` as `[Complex<F>]`.
///
/// Fails with [`StridedError::OddComplexLength`] when `src` holds an odd
/// number of components.
pub fn from_interleaved<F: Pod>(src: &[F]) -> Result<&[Complex<F>]> {
    if src.len() % 2 != 0 {
        return Err(StridedError::OddComplexLength(src.len()));
    }
    bytemuck::try_cast_slice(src).map_err(|_| StridedError::OddComplexLength(src.len()))
}

/// Mutable variant of [`from_interleaved`].
pub fn from_interleaved_mut<F: Pod>(src: &mut [F]) -> Result<&mut [Complex<F>]> {
    let len = src.len();
    if len % 2 != 0 {
        return Err(StridedError::OddComplexLength(len));
    }
    bytemuck::try_cast_slice_mut(src).map_err(|_| StridedError::OddComplexLength(len))
}

// ============================================================================
// Accessor buffers
// ============================================================================

/// Read-only interleaved complex buffer.
#[derive(Debug, Clone, Copy)]
pub struct ComplexSlice<'a, F> {
    data: &'a [F],
}

impl<'a, F: Copy> ComplexSlice<'a, F> {
    pub fn new(data: &'a [F]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(StridedError::OddComplexLength(data.len()));
        }
        Ok(Self { data })
    }

    /// Underlying interleaved components.
    #[inline]
    pub fn components(&self) -> &'a [F] {
        self.data
    }
}

impl<F: Copy> Buffer for ComplexSlice<'_, F> {
    type Elem = Complex<F>;

    #[inline]
    fn len(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    fn get(&self, index: usize) -> Complex<F> {
        Complex::new(self.data[2 * index], self.data[2 * index + 1])
    }
}

/// Mutable interleaved complex buffer.
#[derive(Debug)]
pub struct ComplexSliceMut<'a, F> {
    data: &'a mut [F],
}

impl<'a, F: Copy> ComplexSliceMut<'a, F> {
    pub fn new(data: &'a mut [F]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(StridedError::OddComplexLength(data.len()));
        }
        Ok(Self { data })
    }

    #[inline]
    pub fn components(&self) -> &[F] {
        &*self.data
    }

    #[inline]
    pub fn into_components(self) -> &'a mut [F] {
        self.data
    }
}

impl<F: Copy> Buffer for ComplexSliceMut<'_, F> {
    type Elem = Complex<F>;

    #[inline]
    fn len(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    fn get(&self, index: usize) -> Complex<F> {
        Complex::new(self.data[2 * index], self.data[2 * index + 1])
    }
}

impl<F: Copy> BufferMut for ComplexSliceMut<'_, F> {
    #[inline]
    fn set(&mut self, index: usize, value: Complex<F>) {
        self.data[2 * index] = value.re;
        self.data[2 * index + 1] = value.im;
    }
}
