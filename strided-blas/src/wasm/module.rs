use std::marker::PhantomData;
use std::mem::size_of;
use std::ops::Range;

use bytemuck::Pod;
use strided_traits::RealScalar;
use strided_view::{resolve_offset, view_index_range, StridedError};

use super::arena::{ArenaSlice, ArenaSliceMut};
use super::memory::Memory;
use crate::level1::{gnrm2_ndarray, grot_ndarray};
use crate::{BlasError, Result};

/// A routine that can be bound to a linear memory.
pub trait Routine {
    const NAME: &'static str;
}

/// Euclidean norm routine marker.
pub struct Nrm2<F>(PhantomData<F>);

/// Plane rotation routine marker.
pub struct Rot<F>(PhantomData<F>);

impl Routine for Nrm2<f32> {
    const NAME: &'static str = "snrm2";
}

impl Routine for Nrm2<f64> {
    const NAME: &'static str = "dnrm2";
}

impl Routine for Rot<f32> {
    const NAME: &'static str = "srot";
}

impl Routine for Rot<f64> {
    const NAME: &'static str = "drot";
}

pub type Snrm2Module<'m> = Module<'m, Nrm2<f32>>;
pub type Dnrm2Module<'m> = Module<'m, Nrm2<f64>>;
pub type SrotModule<'m> = Module<'m, Rot<f32>>;
pub type DrotModule<'m> = Module<'m, Rot<f64>>;

/// A routine bound to a [`Memory`].
///
/// The module must be [initialized](Module::initialize) before its routine
/// can run. Pointers are byte offsets into the memory; strides and offsets
/// count elements.
pub struct Module<'m, R> {
    memory: &'m mut Memory,
    initialized: bool,
    _routine: PhantomData<R>,
}

impl<'m, R: Routine> Module<'m, R> {
    pub fn new(memory: &'m mut Memory) -> Self {
        Self {
            memory,
            initialized: false,
            _routine: PhantomData,
        }
    }

    /// Prepare the module for invocation.
    pub fn initialize(&mut self) -> &mut Self {
        if !self.initialized {
            tracing::debug!(
                routine = R::NAME,
                pages = self.memory.pages(),
                "initialized linear-memory module"
            );
            self.initialized = true;
        }
        self
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn memory(&self) -> &Memory {
        &*self.memory
    }

    /// Copy `values` into memory starting at `byte_offset`.
    pub fn write<T: Pod>(&mut self, byte_offset: usize, values: &[T]) -> Result<&mut Self> {
        let src: &[u8] = bytemuck::cast_slice(values);
        let range = self.memory.checked_range(byte_offset, src.len())?;
        self.memory.as_bytes_mut()[range].copy_from_slice(src);
        Ok(self)
    }

    /// Copy memory starting at `byte_offset` into `out`.
    pub fn read<T: Pod>(&self, byte_offset: usize, out: &mut [T]) -> Result<()> {
        let dst: &mut [u8] = bytemuck::cast_slice_mut(out);
        let range = self.memory.checked_range(byte_offset, dst.len())?;
        dst.copy_from_slice(&self.memory.as_bytes()[range]);
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<()> {
        if !self.initialized {
            return Err(BlasError::ModuleNotInitialized);
        }
        Ok(())
    }
}

/// Bytes covering every element a strided operand addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    bytes: Range<usize>,
    /// Offset of logical element 0, relative to the start of `bytes`.
    offset: usize,
}

fn operand_region<F>(
    memory: &Memory,
    n: usize,
    ptr: usize,
    stride: isize,
    offset: usize,
) -> Result<Region> {
    let Some((lo, hi)) = view_index_range(n, stride, offset)? else {
        return Ok(Region {
            bytes: 0..0,
            offset: 0,
        });
    };
    let sz = size_of::<F>() as isize;
    let byte_at = |idx: isize| -> Result<isize> {
        let ptr = isize::try_from(ptr).map_err(|_| StridedError::OffsetOverflow)?;
        idx.checked_mul(sz)
            .and_then(|d| ptr.checked_add(d))
            .ok_or_else(|| StridedError::OffsetOverflow.into())
    };
    let start = byte_at(lo)?;
    let end = byte_at(hi)?
        .checked_add(sz)
        .ok_or(StridedError::OffsetOverflow)?;
    if start < 0 || end as usize > memory.byte_len() {
        return Err(BlasError::MemoryOutOfBounds {
            start,
            end,
            len: memory.byte_len(),
        });
    }
    Ok(Region {
        bytes: start as usize..end as usize,
        offset: (offset as isize - lo) as usize,
    })
}

/// Split `bytes` into two disjoint mutable windows.
fn split_disjoint(
    bytes: &mut [u8],
    a: Range<usize>,
    b: Range<usize>,
) -> Result<(&mut [u8], &mut [u8])> {
    if a.start < b.end && b.start < a.end {
        return Err(BlasError::OverlappingRegions);
    }
    if a.end <= b.start {
        let (head, tail) = bytes.split_at_mut(b.start);
        Ok((&mut head[a], &mut tail[..b.end - b.start]))
    } else {
        let (head, tail) = bytes.split_at_mut(a.start);
        Ok((&mut tail[..a.end - a.start], &mut head[b]))
    }
}

impl<F: RealScalar> Module<'_, Nrm2<F>>
where
    Nrm2<F>: Routine,
{
    /// Norm of `n` elements starting at byte `x_ptr`; the offset is resolved
    /// from the stride sign.
    pub fn main(&self, n: usize, x_ptr: usize, stride: isize) -> Result<F> {
        self.ndarray(n, x_ptr, stride, resolve_offset(n, stride))
    }

    /// Norm with an explicit element offset relative to `x_ptr`.
    pub fn ndarray(&self, n: usize, x_ptr: usize, stride: isize, offset: usize) -> Result<F> {
        self.ensure_initialized()?;
        let region = operand_region::<F>(&*self.memory, n, x_ptr, stride, offset)?;
        let xs = ArenaSlice::<F>::new(&self.memory.as_bytes()[region.bytes]);
        gnrm2_ndarray(n, &xs, stride, region.offset)
    }
}

impl<F: RealScalar> Module<'_, Rot<F>>
where
    Rot<F>: Routine,
{
    /// Rotate `n` element pairs in place; offsets are resolved from the
    /// stride signs. Returns `y_ptr`.
    pub fn main(
        &mut self,
        n: usize,
        x_ptr: usize,
        stride_x: isize,
        y_ptr: usize,
        stride_y: isize,
        c: F,
        s: F,
    ) -> Result<usize> {
        self.ndarray(
            n,
            x_ptr,
            stride_x,
            resolve_offset(n, stride_x),
            y_ptr,
            stride_y,
            resolve_offset(n, stride_y),
            c,
            s,
        )
    }

    /// Rotation with explicit element offsets. Returns `y_ptr`.
    ///
    /// The bytes addressed by `x` and `y` must not overlap.
    pub fn ndarray(
        &mut self,
        n: usize,
        x_ptr: usize,
        stride_x: isize,
        offset_x: usize,
        y_ptr: usize,
        stride_y: isize,
        offset_y: usize,
        c: F,
        s: F,
    ) -> Result<usize> {
        self.ensure_initialized()?;
        let xr = operand_region::<F>(&*self.memory, n, x_ptr, stride_x, offset_x)?;
        let yr = operand_region::<F>(&*self.memory, n, y_ptr, stride_y, offset_y)?;
        if n == 0 {
            return Ok(y_ptr);
        }
        let (xb, yb) = split_disjoint(self.memory.as_bytes_mut(), xr.bytes, yr.bytes)?;
        let mut xs = ArenaSliceMut::<F>::new(xb);
        let mut ys = ArenaSliceMut::<F>::new(yb);
        grot_ndarray(n, &mut xs, stride_x, xr.offset, &mut ys, stride_y, yr.offset, c, s)?;
        Ok(y_ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level1::{drot, snrm2};
    use approx::assert_relative_eq;
    use strided_traits::ErrorKind;

    #[test]
    fn test_snrm2_module_matches_slice_kernel() {
        let x = [1.0f32, -3.0, 2.0, 5.0, -4.0];
        let mut mem = Memory::new(1).unwrap();
        let mut module = Snrm2Module::new(&mut mem);
        module.initialize().write(16, &x).unwrap();
        let expected = snrm2(3, &x, 2).unwrap();
        assert_relative_eq!(module.main(3, 16, 2).unwrap(), expected);
        assert_relative_eq!(module.main(3, 16, -2).unwrap(), snrm2(3, &x, -2).unwrap());
        assert_relative_eq!(
            module.ndarray(2, 16, 1, 3).unwrap(),
            snrm2(2, &x[3..], 1).unwrap()
        );
    }

    #[test]
    fn test_module_requires_initialization() {
        let mut mem = Memory::new(1).unwrap();
        let module = Dnrm2Module::new(&mut mem);
        assert!(!module.is_initialized());
        let err = module.main(1, 0, 1).unwrap_err();
        assert_eq!(err, BlasError::ModuleNotInitialized);
    }

    #[test]
    fn test_module_out_of_bounds() {
        let mut mem = Memory::new(1).unwrap();
        let mut module = Dnrm2Module::new(&mut mem);
        module.initialize();
        let err = module.main(2, crate::wasm::PAGE_SIZE - 8, 1).unwrap_err();
        assert!(matches!(err, BlasError::MemoryOutOfBounds { .. }));
        assert_eq!(err.kind(), ErrorKind::Range);
        // A negative explicit offset walk may not reach before address zero.
        assert!(module.ndarray(2, 0, -1, 0).is_err());
        assert!(module.write(crate::wasm::PAGE_SIZE, &[1.0f64]).is_err());
    }

    #[test]
    fn test_module_empty_vector() {
        let mut mem = Memory::new(0).unwrap();
        let mut module = Dnrm2Module::new(&mut mem);
        module.initialize();
        assert_eq!(module.main(0, 0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_drot_module_matches_slice_kernel() {
        let x = [1.0f64, 2.0, 3.0];
        let y = [4.0f64, 5.0, 6.0];
        let (c, s) = (0.6, 0.8);

        let mut mem = Memory::new(1).unwrap();
        let mut module = DrotModule::new(&mut mem);
        module.initialize();
        module.write(0, &x).unwrap().write(100, &y).unwrap();
        assert_eq!(module.main(3, 0, 1, 100, -1, c, s).unwrap(), 100);

        let (mut ex, mut ey) = (x, y);
        drot(3, &mut ex, 1, &mut ey, -1, c, s).unwrap();

        let mut gx = [0.0f64; 3];
        let mut gy = [0.0f64; 3];
        module.read(0, &mut gx).unwrap();
        module.read(100, &mut gy).unwrap();
        for k in 0..3 {
            assert_relative_eq!(gx[k], ex[k]);
            assert_relative_eq!(gy[k], ey[k]);
        }
    }

    #[test]
    fn test_srot_module_y_before_x() {
        let mut mem = Memory::new(1).unwrap();
        let mut module = SrotModule::new(&mut mem);
        module.initialize();
        module.write(64, &[1.0f32, 2.0]).unwrap();
        module.write(0, &[10.0f32, 20.0]).unwrap();
        module.ndarray(2, 64, 1, 0, 0, 1, 0, 0.0, 1.0).unwrap();
        let mut out = [0.0f32; 2];
        module.read(64, &mut out).unwrap();
        assert_eq!(out, [10.0, 20.0]);
        module.read(0, &mut out).unwrap();
        assert_eq!(out, [-1.0, -2.0]);
    }

    #[test]
    fn test_rot_module_rejects_overlap() {
        let mut mem = Memory::new(1).unwrap();
        let mut module = DrotModule::new(&mut mem);
        module.initialize();
        let err = module.main(2, 0, 1, 8, 1, 1.0, 0.0).unwrap_err();
        assert_eq!(err, BlasError::OverlappingRegions);
    }

    #[test]
    fn test_operand_region() {
        let mem = Memory::new(1).unwrap();
        let r = operand_region::<f32>(&mem, 3, 40, -2, 4).unwrap();
        assert_eq!(r, Region { bytes: 40..60, offset: 4 });
        let r = operand_region::<f32>(&mem, 3, 40, -2, 0).unwrap();
        assert_eq!(r, Region { bytes: 24..44, offset: 4 });
    }
}
