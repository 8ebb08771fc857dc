//! Strided BLAS-style kernels over raw and accessor-based buffers.
//!
//! This crate re-exports the workspace members:
//!
//! - [`traits`]: data-type tags, error kinds and scalar bounds
//! - [`view`]: offset resolution, buffer accessors and one-dimensional views
//! - [`kernel`]: the nullary/unary/binary/ternary strided applicator
//! - [`blas`]: level 1 and level 2 routines and the linear-memory modules
//! - [`dispatch`]: data-type tagged dispatch tables
//!
//! # Example
//!
//! ```rust
//! use strided_numeric::blas::{sspr, Order, Uplo};
//!
//! // Column-major upper packed triangle of a 2x2 matrix.
//! let x = [1.0f32, 2.0];
//! let mut ap = [0.0f32; 3];
//! sspr(Order::ColMajor, Uplo::Upper, 2, 1.0, &x, 1, &mut ap).unwrap();
//! assert_eq!(ap, [1.0, 2.0, 4.0]);
//! ```

pub use strided_blas as blas;
pub use strided_dispatch as dispatch;
pub use strided_kernel as kernel;
pub use strided_traits as traits;
pub use strided_view as view;

pub use strided_blas::{BlasError, Order, Uplo};
pub use strided_dispatch::{dispatch, DispatchError, DispatchTable, Dispatcher, Input, TableItem};
pub use strided_traits::{DType, ErrorKind};
pub use strided_view::{resolve_offset, StridedError, StridedView, StridedViewMut};
