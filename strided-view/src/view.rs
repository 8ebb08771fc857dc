//! One-dimensional strided views.
//!
//! - [`StridedView`]: read-only `(buffer, len, stride, offset)` view
//! - [`StridedViewMut`]: mutable counterpart
//!
//! Both validate at construction that every addressed physical index
//! `offset + i * stride`, `0 <= i < len`, lies inside the buffer, so element
//! access afterwards never needs a signed bounds check.

use std::fmt;

use crate::accessor::{Buffer, BufferMut};
use crate::offset::{resolve_offset, view_index_range};
use crate::{Result, StridedError};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that all addressed indices stay within `[0, buf_len)`.
fn validate_bounds(buf_len: usize, len: usize, stride: isize, offset: usize) -> Result<()> {
    let Some((min, max)) = view_index_range(len, stride, offset)? else {
        return Ok(());
    };
    if min < 0 || max as usize >= buf_len {
        return Err(StridedError::OutOfBounds {
            min,
            max,
            len: buf_len,
        });
    }
    Ok(())
}

#[inline]
fn physical_index(offset: usize, stride: isize, i: usize) -> usize {
    (offset as isize + i as isize * stride) as usize
}

// ============================================================================
// StridedView
// ============================================================================

/// Immutable one-dimensional strided view.
///
/// # Type Parameters
/// - `'a`: lifetime of the borrowed buffer
/// - `B`: buffer type (`[T]`, [`ComplexSlice`](crate::ComplexSlice), ...)
pub struct StridedView<'a, B: ?Sized> {
    buf: &'a B,
    len: usize,
    stride: isize,
    offset: usize,
}

impl<B: ?Sized> Clone for StridedView<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for StridedView<'_, B> {}

impl<B: ?Sized> fmt::Debug for StridedView<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedView")
            .field("len", &self.len)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, B: Buffer + ?Sized> StridedView<'a, B> {
    /// Create a view whose first logical element sits at `offset`.
    pub fn new(buf: &'a B, len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(buf.len(), len, stride, offset)?;
        Ok(Self {
            buf,
            len,
            stride,
            offset,
        })
    }

    /// Create a view whose offset is resolved from `len` and the stride sign.
    pub fn with_stride(buf: &'a B, len: usize, stride: isize) -> Result<Self> {
        Self::new(buf, len, stride, resolve_offset(len, stride))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn buffer(&self) -> &'a B {
        self.buf
    }

    /// Physical index of logical element `i`.
    #[inline]
    pub fn index_of(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        physical_index(self.offset, self.stride, i)
    }

    /// Read logical element `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn get(&self, i: usize) -> B::Elem {
        assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        self.buf.get(self.index_of(i))
    }

    /// Iterate logical elements in increasing index order.
    pub fn iter(&self) -> impl Iterator<Item = B::Elem> + '_ {
        (0..self.len).map(move |i| self.buf.get(self.index_of(i)))
    }

    /// The same elements in reverse logical order.
    pub fn reversed(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self {
            buf: self.buf,
            len: self.len,
            stride: -self.stride,
            offset: self.index_of(self.len - 1),
        }
    }
}

// ============================================================================
// StridedViewMut
// ============================================================================

/// Mutable one-dimensional strided view.
pub struct StridedViewMut<'a, B: ?Sized> {
    buf: &'a mut B,
    len: usize,
    stride: isize,
    offset: usize,
}

impl<B: ?Sized> fmt::Debug for StridedViewMut<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedViewMut")
            .field("len", &self.len)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, B: BufferMut + ?Sized> StridedViewMut<'a, B> {
    /// Create a mutable view whose first logical element sits at `offset`.
    pub fn new(buf: &'a mut B, len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(buf.len(), len, stride, offset)?;
        Ok(Self {
            buf,
            len,
            stride,
            offset,
        })
    }

    /// Create a mutable view whose offset is resolved from `len` and the stride sign.
    pub fn with_stride(buf: &'a mut B, len: usize, stride: isize) -> Result<Self> {
        let offset = resolve_offset(len, stride);
        Self::new(buf, len, stride, offset)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn buffer(&self) -> &B {
        &*self.buf
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut B {
        &mut *self.buf
    }

    #[inline]
    pub fn index_of(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        physical_index(self.offset, self.stride, i)
    }

    #[inline]
    pub fn get(&self, i: usize) -> B::Elem {
        assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        self.buf.get(self.index_of(i))
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: B::Elem) {
        assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        let idx = self.index_of(i);
        self.buf.set(idx, value);
    }

    /// Reborrow as an immutable view.
    pub fn as_view(&self) -> StridedView<'_, B> {
        StridedView {
            buf: &*self.buf,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// Release the view and hand back the borrowed buffer.
    pub fn into_inner(self) -> &'a mut B {
        self.buf
    }
}
