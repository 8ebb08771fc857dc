use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::Pod;
use strided_view::{Buffer, BufferMut};

/// Read-only buffer of `F` elements stored back to back in raw bytes.
///
/// Element `i` occupies bytes `[i * size_of::<F>(), (i + 1) * size_of::<F>())`;
/// no alignment is required.
#[derive(Debug, Clone, Copy)]
pub struct ArenaSlice<'a, F> {
    bytes: &'a [u8],
    _elem: PhantomData<F>,
}

impl<'a, F: Pod> ArenaSlice<'a, F> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            _elem: PhantomData,
        }
    }
}

impl<F: Pod> Buffer for ArenaSlice<'_, F> {
    type Elem = F;

    #[inline]
    fn len(&self) -> usize {
        self.bytes.len() / size_of::<F>()
    }

    #[inline]
    fn get(&self, index: usize) -> F {
        let sz = size_of::<F>();
        bytemuck::pod_read_unaligned(&self.bytes[index * sz..(index + 1) * sz])
    }
}

/// Mutable counterpart of [`ArenaSlice`].
#[derive(Debug)]
pub struct ArenaSliceMut<'a, F> {
    bytes: &'a mut [u8],
    _elem: PhantomData<F>,
}

impl<'a, F: Pod> ArenaSliceMut<'a, F> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self {
            bytes,
            _elem: PhantomData,
        }
    }
}

impl<F: Pod> Buffer for ArenaSliceMut<'_, F> {
    type Elem = F;

    #[inline]
    fn len(&self) -> usize {
        self.bytes.len() / size_of::<F>()
    }

    #[inline]
    fn get(&self, index: usize) -> F {
        let sz = size_of::<F>();
        bytemuck::pod_read_unaligned(&self.bytes[index * sz..(index + 1) * sz])
    }
}

impl<F: Pod> BufferMut for ArenaSliceMut<'_, F> {
    #[inline]
    fn set(&mut self, index: usize, value: F) {
        let sz = size_of::<F>();
        self.bytes[index * sz..(index + 1) * sz].copy_from_slice(bytemuck::bytes_of(&value));
    }
}
