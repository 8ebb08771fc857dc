//! Level 1 routines: vector-vector operations.

mod copy;
mod nrm2;
mod rot;
mod swap;

pub use copy::{ccopy, ccopy_ndarray, gcopy, gcopy_ndarray, zcopy, zcopy_ndarray};
pub use nrm2::{
    dnrm2, dnrm2_ndarray, dznrm2, dznrm2_ndarray, gnrm2_ndarray, scnrm2, scnrm2_ndarray, snrm2,
    snrm2_ndarray,
};
pub use rot::{
    csrot, csrot_ndarray, drot, drot_ndarray, grot_ndarray, srot, srot_ndarray, zdrot,
    zdrot_ndarray,
};
pub use swap::{cswap, cswap_ndarray, gswap, gswap_ndarray, zswap, zswap_ndarray};
