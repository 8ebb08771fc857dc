use crate::{Result, StridedError};

/// Index of the first logical element for a view of `n` elements with `stride`.
///
/// A non-negative stride starts at the head of the buffer. A negative stride
/// starts at the tail, `(n - 1) * |stride|`, so that adding `stride` `n - 1`
/// times walks back to index zero. Returns `0` when `n == 0`.
///
/// Saturates at `usize::MAX` when the product overflows; view construction
/// then rejects the offset with [`StridedError::OffsetOverflow`].
#[inline]
pub fn resolve_offset(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        0
    } else {
        (n - 1).saturating_mul(stride.unsigned_abs())
    }
}

/// Smallest and largest physical index addressed by `n` elements.
///
/// Returns `Ok(None)` when `n == 0` (nothing is addressed).
pub fn view_index_range(n: usize, stride: isize, offset: usize) -> Result<Option<(isize, isize)>> {
    if n == 0 {
        return Ok(None);
    }
    let start = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let last = isize::try_from(n - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let span = stride
        .checked_mul(last)
        .ok_or(StridedError::OffsetOverflow)?;
    let end = start
        .checked_add(span)
        .ok_or(StridedError::OffsetOverflow)?;
    Ok(Some((start.min(end), start.max(end))))
}
