//! One-dimensional strided views over raw and accessor-based buffers.
//!
//! # Core Types
//!
//! - [`Buffer`] / [`BufferMut`]: uniform element access over heterogeneous storage.
//!   Plain slices expose raw indexing; interleaved complex buffers go through
//!   `get`/`set` accessors that translate one logical index into two physical slots.
//! - [`ComplexSlice`] / [`ComplexSliceMut`]: interleaved `(re, im)` storage
//! - [`StridedView`] / [`StridedViewMut`]: `(buffer, len, stride, offset)` views
//!
//! # Offsets
//!
//! Two conventions coexist:
//! - resolved offsets ([`StridedView::with_stride`]): the offset is derived from the
//!   element count and stride sign via [`resolve_offset`], so a negative stride walks
//!   the buffer from its tail;
//! - explicit offsets ([`StridedView::new`]): the caller supplies the index of the
//!   first logical element and the stride alone determines direction.
//!
//! # Example
//!
//! ```rust
//! use strided_view::StridedView;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! let rev = StridedView::with_stride(&data[..], 4, -1).unwrap();
//! assert_eq!(rev.offset(), 3);
//! assert_eq!(rev.iter().collect::<Vec<_>>(), vec![4.0, 3.0, 2.0, 1.0]);
//! ```

pub mod accessor;
pub mod complex;
mod offset;
pub mod view;

pub use accessor::{AccessMode, Buffer, BufferMut};
pub use complex::{
    as_interleaved, as_interleaved_mut, from_interleaved, from_interleaved_mut, ComplexSlice,
    ComplexSliceMut,
};
pub use offset::{resolve_offset, view_index_range};
pub use strided_traits::ErrorKind;
pub use view::{StridedView, StridedViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building or combining strided views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// Participating views address a different number of logical elements.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// The view addresses indices outside of its buffer.
    #[error("view addresses indices [{min}, {max}] outside a buffer of length {len}")]
    OutOfBounds { min: isize, max: isize, len: usize },

    /// Integer overflow while computing a physical index.
    #[error("offset overflow while computing index")]
    OffsetOverflow,

    /// Interleaved complex storage must hold an even number of components.
    #[error("interleaved complex buffer has odd length {0}")]
    OddComplexLength(usize),
}

impl StridedError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StridedError::OddComplexLength(_) => ErrorKind::Type,
            StridedError::LengthMismatch(..)
            | StridedError::OutOfBounds { .. }
            | StridedError::OffsetOverflow => ErrorKind::Range,
        }
    }
}

/// Result type for strided view operations.
pub type Result<T> = std::result::Result<T, StridedError>;
