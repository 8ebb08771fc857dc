//! Scalar type bounds for strided BLAS kernels.

use crate::dtype::HasDType;

/// Real floating-point element type usable by the level 1 and level 2 kernels.
///
/// Every arithmetic step of a kernel instantiated with `f32` is carried out in
/// single precision, so each intermediate product and sum is rounded to `f32`
/// exactly as a single-precision reference implementation would round it.
///
/// The `Pod` bound lets the linear-memory backend read and write elements at
/// arbitrary byte offsets.
pub trait RealScalar:
    num_traits::Float
    + bytemuck::Pod
    + HasDType
    + Default
    + std::fmt::Debug
    + std::ops::AddAssign
    + Send
    + Sync
    + 'static
{
}

impl RealScalar for f32 {}

impl RealScalar for f64 {}
