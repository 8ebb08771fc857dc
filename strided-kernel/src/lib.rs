//! Generic strided applicator loops over one-dimensional views.
//!
//! # Operations
//!
//! - [`nullary_into`]: `dst[i] = f()`
//! - [`unary_into`]: `dst[i] = f(x[i])`
//! - [`binary_into`]: `dst[i] = f(x[i], y[i])`
//! - [`ternary_into`]: `dst[i] = f(x[i], y[i], z[i])`
//! - [`zip_update2`]: `(x[i], y[i]) = f(x[i], y[i])`
//! - [`fold`]: left fold over `x` in logical order
//!
//! Every operation checks that all participating views have the same length
//! before touching any buffer, returns immediately for empty views, and
//! visits logical indices strictly in increasing order.
//!
//! # Access paths
//!
//! The path is selected once per call. When every participating buffer exposes
//! a plain slice ([`Buffer::as_raw`]) the loop indexes the slices directly, and
//! when additionally every stride is 1 it zips contiguous sub-slices so LLVM
//! can vectorize the body. Otherwise the loop goes through `get`/`set`.
//!
//! # Example
//!
//! ```rust
//! use strided_kernel::binary_into;
//! use strided_view::{StridedView, StridedViewMut};
//!
//! let x = [1.0, 2.0, 3.0];
//! let y = [10.0, 20.0, 30.0];
//! let mut out = [0.0; 3];
//! {
//!     let xv = StridedView::with_stride(&x[..], 3, 1).unwrap();
//!     let yv = StridedView::with_stride(&y[..], 3, -1).unwrap();
//!     let mut ov = StridedViewMut::with_stride(&mut out[..], 3, 1).unwrap();
//!     binary_into(&mut ov, &xv, &yv, |a, b| a + b).unwrap();
//! }
//! assert_eq!(out, [31.0, 22.0, 13.0]);
//! ```

mod map;
mod reduce;

pub use map::{binary_into, nullary_into, ternary_into, unary_into, zip_update2};
pub use reduce::fold;

pub use strided_view::{Buffer, BufferMut, Result, StridedError, StridedView, StridedViewMut};

// ============================================================================
// Utility functions
// ============================================================================

pub(crate) fn ensure_same_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(StridedError::LengthMismatch(a, b));
    }
    Ok(())
}

/// Offset and stride of one operand, detached from its buffer borrow.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lane {
    offset: usize,
    stride: isize,
}

impl Lane {
    #[inline]
    pub(crate) fn new(offset: usize, stride: isize) -> Self {
        Self { offset, stride }
    }

    #[inline(always)]
    pub(crate) fn at(self, i: usize) -> usize {
        (self.offset as isize + i as isize * self.stride) as usize
    }

    #[inline(always)]
    pub(crate) fn unit(self) -> bool {
        self.stride == 1
    }

    /// Contiguous range covered by `len` elements of a unit-stride lane.
    #[inline(always)]
    pub(crate) fn span(self, len: usize) -> std::ops::Range<usize> {
        self.offset..self.offset + len
    }
}
