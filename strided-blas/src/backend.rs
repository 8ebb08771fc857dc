//! Backend abstraction for the norm kernels.
//!
//! This module defines the [`Nrm2Backend`] trait, marker structs for each
//! backend, and the [`ActiveBackend`] type alias that serves as the single
//! point of backend selection based on Cargo features. The linear-memory
//! modules in [`crate::wasm`] are a third, explicitly constructed backend.

#[cfg(feature = "blas")]
use strided_view::StridedView;

use crate::level1::gnrm2_ndarray;
use crate::Result;

/// Trait for backends that can compute the Euclidean norm of a real vector.
pub trait Nrm2Backend {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    fn snrm2(n: usize, x: &[f32], stride: isize, offset: usize) -> Result<f32>;

    fn dnrm2(n: usize, x: &[f64], stride: isize, offset: usize) -> Result<f64>;
}

// ---------------------------------------------------------------------------
// Marker structs and Nrm2Backend implementations
// ---------------------------------------------------------------------------

/// Portable backend using the scaled sum-of-squares loop.
pub struct FallbackBackend;

impl Nrm2Backend for FallbackBackend {
    const NAME: &'static str = "fallback";

    fn snrm2(n: usize, x: &[f32], stride: isize, offset: usize) -> Result<f32> {
        gnrm2_ndarray(n, x, stride, offset)
    }

    fn dnrm2(n: usize, x: &[f64], stride: isize, offset: usize) -> Result<f64> {
        gnrm2_ndarray(n, x, stride, offset)
    }
}

/// Backend calling the system CBLAS `cblas_?nrm2`.
///
/// CBLAS only accepts positive increments that fit in a C `int`; other
/// inputs are routed to [`FallbackBackend`].
#[cfg(feature = "blas")]
pub struct NativeBackend;

#[cfg(feature = "blas")]
impl NativeBackend {
    /// `(n, incx)` as CBLAS integers, if the call can be delegated.
    fn cblas_args(n: usize, stride: isize) -> Option<(i32, i32)> {
        if n == 0 || stride <= 0 {
            return None;
        }
        Some((i32::try_from(n).ok()?, i32::try_from(stride).ok()?))
    }
}

#[cfg(feature = "blas")]
impl Nrm2Backend for NativeBackend {
    const NAME: &'static str = "cblas";

    fn snrm2(n: usize, x: &[f32], stride: isize, offset: usize) -> Result<f32> {
        StridedView::new(x, n, stride, offset)?;
        match Self::cblas_args(n, stride) {
            Some((n, inc)) => Ok(unsafe { cblas_sys::cblas_snrm2(n, x[offset..].as_ptr(), inc) }),
            None => {
                tracing::trace!(n, stride, "snrm2: delegating to fallback backend");
                FallbackBackend::snrm2(n, x, stride, offset)
            }
        }
    }

    fn dnrm2(n: usize, x: &[f64], stride: isize, offset: usize) -> Result<f64> {
        StridedView::new(x, n, stride, offset)?;
        match Self::cblas_args(n, stride) {
            Some((n, inc)) => Ok(unsafe { cblas_sys::cblas_dnrm2(n, x[offset..].as_ptr(), inc) }),
            None => {
                tracing::trace!(n, stride, "dnrm2: delegating to fallback backend");
                FallbackBackend::dnrm2(n, x, stride, offset)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the SINGLE point of backend selection
// ---------------------------------------------------------------------------

/// The active norm backend, selected by Cargo features.
///
/// - `blas` -> [`NativeBackend`]
/// - no backend feature -> [`FallbackBackend`]
#[cfg(feature = "blas")]
pub type ActiveBackend = NativeBackend;

#[cfg(not(feature = "blas"))]
pub type ActiveBackend = FallbackBackend;

/// Name of the backend selected at compile time.
pub fn active_backend_name() -> &'static str {
    <ActiveBackend as Nrm2Backend>::NAME
}
