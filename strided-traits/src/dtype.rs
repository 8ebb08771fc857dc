//! Data-type tags.
//!
//! A closed set of element type names. Tables keyed by these tags are
//! validated when they are built, so an unknown name never reaches a
//! dispatch call.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex;

/// Element data type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Float64,
    Float32,
    Int32,
    Int16,
    Int8,
    Uint32,
    Uint16,
    Uint8,
    /// Double-precision complex: two interleaved `f64` components.
    Complex128,
    /// Single-precision complex: two interleaved `f32` components.
    Complex64,
    Bool,
    /// Untyped list of values; also the fallback key in dispatch tables.
    Generic,
    /// Real scalar value (scalar calling convention only).
    Number,
    /// Complex scalar value (scalar calling convention only).
    Complex,
}

/// Error returned when a string does not name a known data type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown data type: {0:?}")]
pub struct ParseDTypeError(pub String);

impl DType {
    pub const ALL: [DType; 14] = [
        DType::Float64,
        DType::Float32,
        DType::Int32,
        DType::Int16,
        DType::Int8,
        DType::Uint32,
        DType::Uint16,
        DType::Uint8,
        DType::Complex128,
        DType::Complex64,
        DType::Bool,
        DType::Generic,
        DType::Number,
        DType::Complex,
    ];

    /// Canonical string name.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::Float64 => "float64",
            DType::Float32 => "float32",
            DType::Int32 => "int32",
            DType::Int16 => "int16",
            DType::Int8 => "int8",
            DType::Uint32 => "uint32",
            DType::Uint16 => "uint16",
            DType::Uint8 => "uint8",
            DType::Complex128 => "complex128",
            DType::Complex64 => "complex64",
            DType::Bool => "bool",
            DType::Generic => "generic",
            DType::Number => "number",
            DType::Complex => "complex",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = ParseDTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .iter()
            .copied()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| ParseDTypeError(s.to_string()))
    }
}

/// Element types with a fixed data-type tag.
pub trait HasDType: Copy {
    const DTYPE: DType;
}

macro_rules! impl_has_dtype {
    ($($t:ty => $dt:ident),* $(,)?) => {
        $(impl HasDType for $t {
            const DTYPE: DType = DType::$dt;
        })*
    };
}

impl_has_dtype!(
    f64 => Float64,
    f32 => Float32,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u32 => Uint32,
    u16 => Uint16,
    u8 => Uint8,
    bool => Bool,
    Complex<f64> => Complex128,
    Complex<f32> => Complex64,
);
