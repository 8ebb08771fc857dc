//! Linear-memory backend.
//!
//! Routines in this module operate on vectors that live inside a single,
//! page-sized, byte-addressed [`Memory`] (the layout a WebAssembly instance
//! sees). Callers copy data in with [`Module::write`], invoke a routine with
//! byte pointers into the memory, and copy results out with [`Module::read`].
//! Element access goes through [`ArenaSlice`] / [`ArenaSliceMut`], which read
//! and write unaligned native-endian scalars.
//!
//! # Example
//!
//! ```rust
//! use strided_blas::wasm::{Dnrm2Module, Memory};
//!
//! let mut mem = Memory::new(1).unwrap();
//! let mut module = Dnrm2Module::new(&mut mem);
//! module.initialize();
//! module.write(0, &[3.0f64, 4.0]).unwrap();
//! assert_eq!(module.main(2, 0, 1).unwrap(), 5.0);
//! ```

mod arena;
mod memory;
mod module;

pub use arena::{ArenaSlice, ArenaSliceMut};
pub use memory::{Memory, MAX_PAGES, PAGE_SIZE};
pub use module::{
    Dnrm2Module, DrotModule, Module, Nrm2, Rot, Routine, Snrm2Module, SrotModule,
};
