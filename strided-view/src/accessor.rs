//! Element access strategies.
//!
//! Every buffer exposes `get`/`set` by logical index. Buffers whose logical
//! elements map 1:1 onto slots of a plain slice also hand out that slice via
//! [`Buffer::as_raw`]; the strided loops check this once per call and, when
//! every participating buffer supports it, index the slices directly instead
//! of going through the accessors.

/// How a buffer's logical elements are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Direct subscripting of a plain slice.
    RawIndexed,
    /// `get`/`set` accessor calls (interleaved or byte-addressed storage).
    AccessorBased,
}

/// Read access to a buffer of logical elements.
pub trait Buffer {
    type Elem: Copy;

    /// Number of logical elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the logical element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> Self::Elem;

    /// Plain slice view of the logical elements, if the storage is raw-indexable.
    #[inline]
    fn as_raw(&self) -> Option<&[Self::Elem]> {
        None
    }

    #[inline]
    fn access_mode(&self) -> AccessMode {
        if self.as_raw().is_some() {
            AccessMode::RawIndexed
        } else {
            AccessMode::AccessorBased
        }
    }
}

/// Write access to a buffer of logical elements.
pub trait BufferMut: Buffer {
    /// Write the logical element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Mutable plain slice view, if the storage is raw-indexable.
    #[inline]
    fn as_raw_mut(&mut self) -> Option<&mut [Self::Elem]> {
        None
    }
}

impl<T: Copy> Buffer for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn as_raw(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: Copy> BufferMut for [T] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T: Copy> Buffer for Vec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn as_raw(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: Copy> BufferMut for Vec<T> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}
