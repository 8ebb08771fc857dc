//! BLAS-style level 1 and level 2 kernels over strided buffers.
//!
//! Every routine comes in two forms:
//! - a conventional form taking element strides, where the index of the first
//!   logical element is resolved from the stride sign
//!   ([`resolve_offset`](strided_view::resolve_offset));
//! - an `_ndarray` form taking an explicit offset for every operand.
//!
//! Both forms produce identical results for equivalent inputs. Mutating
//! routines hand back the output buffer they were given.
//!
//! # Routines
//!
//! | routine | operation |
//! |---|---|
//! | [`ccopy`], [`zcopy`], [`gcopy`] | `y = x` |
//! | [`cswap`], [`zswap`], [`gswap`] | `x <-> y` |
//! | [`csrot`], [`zdrot`], [`srot`], [`drot`] | plane rotation |
//! | [`snrm2`], [`dnrm2`], [`scnrm2`], [`dznrm2`] | Euclidean norm |
//! | [`sspr`], [`dspr`] | packed `A = alpha*x*x^T + A` |
//! | [`ssyr2`], [`dsyr2`] | `A = alpha*x*y^T + alpha*y*x^T + A` |
//!
//! Complex vectors are interleaved `[re, im, ...]` slices; their strides and
//! offsets count complex elements.
//!
//! # Backends
//!
//! The real norm routines run on [`ActiveBackend`](backend::ActiveBackend):
//! CBLAS with the `blas` feature, the portable loop otherwise. The
//! [`wasm`] module runs routines against a linear memory.

pub mod backend;
mod error;
pub mod layout;
pub mod level1;
pub mod level2;
pub mod packed;
pub mod wasm;

pub use error::{BlasError, Result};
pub use layout::{Order, Uplo};
pub use level1::*;
pub use level2::*;
pub use packed::{packed_index, packed_len};
