//! Level 2 routines: symmetric rank-1 and rank-2 updates.

mod spr;
mod syr2;

pub use spr::{dspr, dspr_ndarray, sspr, sspr_ndarray};
pub use syr2::{dsyr2, dsyr2_ndarray, ssyr2, ssyr2_ndarray};
