use strided_traits::ErrorKind;
use strided_view::StridedError;

/// Errors raised by the BLAS-style kernels and the linear-memory modules.
///
/// All argument validation happens before any output element is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlasError {
    #[error("invalid order {0:?}: expected \"row-major\" or \"column-major\"")]
    InvalidOrder(String),

    #[error("invalid triangle {0:?}: expected \"upper\" or \"lower\"")]
    InvalidUplo(String),

    #[error("`{arg}` must be nonzero")]
    ZeroStride { arg: &'static str },

    #[error("leading dimension {lda} must be greater than or equal to {min}")]
    InvalidLeadingDimension { lda: usize, min: usize },

    #[error("module must be initialized before invoking a routine")]
    ModuleNotInitialized,

    #[error("byte range [{start}, {end}) lies outside linear memory of {len} bytes")]
    MemoryOutOfBounds { start: isize, end: isize, len: usize },

    #[error("vector operands overlap in linear memory")]
    OverlappingRegions,

    #[error("cannot grow memory from {current} to {requested} pages (maximum {max})")]
    MemoryGrowth {
        current: usize,
        requested: usize,
        max: usize,
    },

    #[error(transparent)]
    Strided(#[from] StridedError),
}

impl BlasError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlasError::InvalidOrder(_)
            | BlasError::InvalidUplo(_)
            | BlasError::ModuleNotInitialized => ErrorKind::Type,
            BlasError::Strided(e) => e.kind(),
            BlasError::ZeroStride { .. }
            | BlasError::InvalidLeadingDimension { .. }
            | BlasError::MemoryOutOfBounds { .. }
            | BlasError::OverlappingRegions
            | BlasError::MemoryGrowth { .. } => ErrorKind::Range,
        }
    }
}

/// Result type for BLAS operations.
pub type Result<T> = std::result::Result<T, BlasError>;

#[inline]
pub(crate) fn ensure_nonzero(stride: isize, arg: &'static str) -> Result<()> {
    if stride == 0 {
        return Err(BlasError::ZeroStride { arg });
    }
    Ok(())
}
