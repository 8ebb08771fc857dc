//! Runtime-tagged kernel inputs.

use std::fmt;

use num_complex::{Complex32, Complex64};
use strided_traits::{DType, HasDType};
use strided_view::as_interleaved;

/// Calling convention, selected from the shape of the first data argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// A single number.
    Scalar,
    /// A flat array with an implied stride and offset.
    Array,
    /// An array described by shape, strides and an explicit offset.
    NdArray,
}

impl Convention {
    pub const ALL: [Convention; 3] = [Convention::Scalar, Convention::Array, Convention::NdArray];

    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Scalar => "scalar",
            Convention::Array => "array",
            Convention::NdArray => "ndarray",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Number(f64),
    Complex(Complex64),
}

impl Scalar {
    pub fn dtype(&self) -> DType {
        match self {
            Scalar::Number(_) => DType::Number,
            Scalar::Complex(_) => DType::Complex,
        }
    }
}

/// A borrowed, typed array buffer.
///
/// Complex variants hold interleaved `[re, im, ...]` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayRef<'a> {
    Float64(&'a [f64]),
    Float32(&'a [f32]),
    Int32(&'a [i32]),
    Int16(&'a [i16]),
    Int8(&'a [i8]),
    Uint32(&'a [u32]),
    Uint16(&'a [u16]),
    Uint8(&'a [u8]),
    Complex128(&'a [f64]),
    Complex64(&'a [f32]),
    Bool(&'a [bool]),
    /// Untyped numeric storage.
    Generic(&'a [f64]),
}

#[inline]
fn tag_of<T: HasDType>(_: &[T]) -> DType {
    T::DTYPE
}

impl ArrayRef<'_> {
    pub fn dtype(&self) -> DType {
        match self {
            ArrayRef::Float64(x) => tag_of(*x),
            ArrayRef::Float32(x) => tag_of(*x),
            ArrayRef::Int32(x) => tag_of(*x),
            ArrayRef::Int16(x) => tag_of(*x),
            ArrayRef::Int8(x) => tag_of(*x),
            ArrayRef::Uint32(x) => tag_of(*x),
            ArrayRef::Uint16(x) => tag_of(*x),
            ArrayRef::Uint8(x) => tag_of(*x),
            ArrayRef::Complex128(_) => Complex64::DTYPE,
            ArrayRef::Complex64(_) => Complex32::DTYPE,
            ArrayRef::Bool(x) => tag_of(*x),
            ArrayRef::Generic(_) => DType::Generic,
        }
    }

    /// Number of logical elements (complex pairs count once).
    pub fn len(&self) -> usize {
        match self {
            ArrayRef::Float64(x) | ArrayRef::Generic(x) => x.len(),
            ArrayRef::Float32(x) => x.len(),
            ArrayRef::Int32(x) => x.len(),
            ArrayRef::Int16(x) => x.len(),
            ArrayRef::Int8(x) => x.len(),
            ArrayRef::Uint32(x) => x.len(),
            ArrayRef::Uint16(x) => x.len(),
            ArrayRef::Uint8(x) => x.len(),
            ArrayRef::Complex128(x) => x.len() / 2,
            ArrayRef::Complex64(x) => x.len() / 2,
            ArrayRef::Bool(x) => x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_slice {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(impl<'a> From<&'a [$t]> for ArrayRef<'a> {
            fn from(x: &'a [$t]) -> Self {
                ArrayRef::$variant(x)
            }
        })*
    };
}

impl_from_slice!(
    f64 => Float64,
    f32 => Float32,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u32 => Uint32,
    u16 => Uint16,
    u8 => Uint8,
    bool => Bool,
);

impl<'a> From<&'a [Complex64]> for ArrayRef<'a> {
    fn from(x: &'a [Complex64]) -> Self {
        ArrayRef::Complex128(as_interleaved(x))
    }
}

impl<'a> From<&'a [Complex32]> for ArrayRef<'a> {
    fn from(x: &'a [Complex32]) -> Self {
        ArrayRef::Complex64(as_interleaved(x))
    }
}

/// An array described by shape, strides and offset over a typed buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArrayRef<'a> {
    pub data: ArrayRef<'a>,
    pub shape: Vec<usize>,
    pub strides: Vec<isize>,
    pub offset: usize,
}

impl<'a> NdArrayRef<'a> {
    pub fn new(data: ArrayRef<'a>, shape: &[usize], strides: &[isize], offset: usize) -> Self {
        Self {
            data,
            shape: shape.to_vec(),
            strides: strides.to_vec(),
            offset,
        }
    }

    /// One-dimensional array over `len` elements.
    pub fn vector(data: ArrayRef<'a>, len: usize, stride: isize, offset: usize) -> Self {
        Self::new(data, &[len], &[stride], offset)
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Number of logical elements addressed by the shape.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.iter().any(|&d| d == 0)
    }
}

/// The first data argument of a dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    Scalar(Scalar),
    Array(ArrayRef<'a>),
    NdArray(NdArrayRef<'a>),
}

impl Input<'_> {
    pub fn convention(&self) -> Convention {
        match self {
            Input::Scalar(_) => Convention::Scalar,
            Input::Array(_) => Convention::Array,
            Input::NdArray(_) => Convention::NdArray,
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            Input::Scalar(s) => s.dtype(),
            Input::Array(a) => a.dtype(),
            Input::NdArray(nd) => nd.dtype(),
        }
    }
}

impl From<f64> for Input<'_> {
    fn from(x: f64) -> Self {
        Input::Scalar(Scalar::Number(x))
    }
}

impl From<Complex64> for Input<'_> {
    fn from(z: Complex64) -> Self {
        Input::Scalar(Scalar::Complex(z))
    }
}

impl<'a> From<ArrayRef<'a>> for Input<'a> {
    fn from(a: ArrayRef<'a>) -> Self {
        Input::Array(a)
    }
}

impl<'a> From<NdArrayRef<'a>> for Input<'a> {
    fn from(nd: NdArrayRef<'a>) -> Self {
        Input::NdArray(nd)
    }
}
