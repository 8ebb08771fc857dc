use strided_traits::{DType, ErrorKind, ParseDTypeError};

use crate::input::Convention;

/// Errors that can occur while building or consulting a dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("malformed `{convention}` table: {reason}")]
    MalformedTable {
        convention: Convention,
        reason: String,
    },

    #[error(transparent)]
    UnknownDType(#[from] ParseDTypeError),

    #[error("no `{0}` table was provided")]
    MissingConvention(Convention),

    #[error("no `{convention}` kernel for data type `{dtype}` and no generic fallback")]
    NoKernel {
        convention: Convention,
        dtype: DType,
    },
}

impl DispatchError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::MalformedTable { .. }
            | DispatchError::UnknownDType(_)
            | DispatchError::MissingConvention(_) => ErrorKind::Type,
            DispatchError::NoKernel { .. } => ErrorKind::Dispatch,
        }
    }
}

/// Convenience alias for `Result<T, DispatchError>`.
pub type Result<T> = std::result::Result<T, DispatchError>;
