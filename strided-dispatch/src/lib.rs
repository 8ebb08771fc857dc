//! Data-type tagged dispatch for strided kernels.
//!
//! A [`DispatchTable`] maps each calling convention (`scalar`, `array`,
//! `ndarray`) to an interleaved `[dtype, kernel, dtype, kernel, ...]` list.
//! [`dispatch`] validates the whole table up front and returns an immutable
//! [`Dispatcher`]. Each call picks the convention from the [`Input`] variant,
//! then the first entry whose data type matches, then a `generic` entry.
//!
//! # Example
//!
//! ```rust
//! use strided_dispatch::{dispatch, ArrayRef, DispatchTable, Input, TableItem};
//!
//! let d = dispatch(
//!     DispatchTable::new()
//!         .scalar(vec![TableItem::dtype("number"), TableItem::kernel(|_| "scalar")])
//!         .array(vec![TableItem::dtype("generic"), TableItem::kernel(|_| "array")]),
//! )
//! .unwrap();
//!
//! assert_eq!(d.call(&Input::from(5.0f64)).unwrap(), "scalar");
//! let x = [1.0, 2.0, 3.0];
//! assert_eq!(d.call(&Input::Array(ArrayRef::Generic(&x))).unwrap(), "array");
//! ```

mod dispatcher;
mod error;
pub mod input;
mod table;

pub use dispatcher::{dispatch, Dispatcher};
pub use error::{DispatchError, Result};
pub use input::{ArrayRef, Convention, Input, NdArrayRef, Scalar};
pub use strided_traits::DType;
pub use table::{DispatchTable, Kernel, TableItem};
