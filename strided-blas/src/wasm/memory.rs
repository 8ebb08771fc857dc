use std::ops::Range;

use crate::{BlasError, Result};

/// Size of one memory page in bytes.
pub const PAGE_SIZE: usize = 65536;

/// Largest number of pages a [`Memory`] may hold (4 GiB).
pub const MAX_PAGES: usize = 65536;

/// Zero-initialized, growable linear memory measured in pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Allocate `pages` zeroed pages.
    pub fn new(pages: usize) -> Result<Self> {
        if pages > MAX_PAGES {
            return Err(BlasError::MemoryGrowth {
                current: 0,
                requested: pages,
                max: MAX_PAGES,
            });
        }
        Ok(Self {
            bytes: vec![0; pages * PAGE_SIZE],
        })
    }

    #[inline]
    pub fn pages(&self) -> usize {
        self.bytes.len() / PAGE_SIZE
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Grow by `delta` zeroed pages and return the previous page count.
    pub fn grow(&mut self, delta: usize) -> Result<usize> {
        let current = self.pages();
        let requested = current.saturating_add(delta);
        if requested > MAX_PAGES {
            return Err(BlasError::MemoryGrowth {
                current,
                requested,
                max: MAX_PAGES,
            });
        }
        self.bytes.resize(requested * PAGE_SIZE, 0);
        tracing::debug!(current, requested, "grew linear memory");
        Ok(current)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Byte range `[start, start + len)`, if it lies inside the memory.
    pub(crate) fn checked_range(&self, start: usize, len: usize) -> Result<Range<usize>> {
        match start.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(BlasError::MemoryOutOfBounds {
                start: start as isize,
                end: start.saturating_add(len) as isize,
                len: self.bytes.len(),
            }),
        }
    }
}
