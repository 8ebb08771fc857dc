//! Shared traits for the strided-numeric workspace.
//!
//! This crate provides the data-type tags and scalar bounds shared across
//! `strided-view`, `strided-kernel`, `strided-blas` and `strided-dispatch`.
//!
//! External crates can depend on `strided-traits` to implement [`HasDType`]
//! for their element types without orphan rule violations.

pub mod dtype;
mod kind;
pub mod scalar;

pub use dtype::{DType, HasDType, ParseDTypeError};
pub use kind::ErrorKind;
pub use scalar::RealScalar;
