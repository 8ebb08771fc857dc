//! Validated dispatch tables and runtime kernel selection.

use std::fmt;

use strided_traits::DType;

use crate::input::{Convention, Input};
use crate::table::{DispatchTable, Kernel, TableItem};
use crate::{DispatchError, Result};

type Entries<R> = Vec<(DType, Kernel<R>)>;

/// An immutable, validated dispatch table.
pub struct Dispatcher<R> {
    scalar: Option<Entries<R>>,
    array: Option<Entries<R>>,
    ndarray: Option<Entries<R>>,
}

/// Validate `table` and build a dispatcher from it.
pub fn dispatch<R>(table: DispatchTable<R>) -> Result<Dispatcher<R>> {
    Dispatcher::new(table)
}

fn validate<R>(convention: Convention, items: Vec<TableItem<R>>) -> Result<Entries<R>> {
    if items.len() % 2 != 0 {
        return Err(DispatchError::MalformedTable {
            convention,
            reason: format!("expected an even number of entries, found {}", items.len()),
        });
    }
    let mut entries = Vec::with_capacity(items.len() / 2);
    let mut iter = items.into_iter().enumerate();
    while let (Some((i, tag)), Some((j, kernel))) = (iter.next(), iter.next()) {
        let name = match tag {
            TableItem::DType(name) => name,
            TableItem::Kernel(_) => {
                return Err(DispatchError::MalformedTable {
                    convention,
                    reason: format!("expected a data type at position {i}"),
                })
            }
        };
        let kernel = match kernel {
            TableItem::Kernel(k) => k,
            TableItem::DType(_) => {
                return Err(DispatchError::MalformedTable {
                    convention,
                    reason: format!("expected a kernel at position {j}"),
                })
            }
        };
        entries.push((name.parse::<DType>()?, kernel));
    }
    Ok(entries)
}

impl<R> Dispatcher<R> {
    /// Validate every list of `table`.
    ///
    /// Each list must have an even length, alternate data-type names and
    /// kernels, and name only known data types.
    pub fn new(table: DispatchTable<R>) -> Result<Self> {
        let DispatchTable {
            scalar,
            array,
            ndarray,
        } = table;
        let check = |convention, items: Option<Vec<TableItem<R>>>| {
            items.map(|items| validate(convention, items)).transpose()
        };
        let dispatcher = Self {
            scalar: check(Convention::Scalar, scalar)?,
            array: check(Convention::Array, array)?,
            ndarray: check(Convention::NdArray, ndarray)?,
        };
        for convention in Convention::ALL {
            tracing::debug!(
                %convention,
                entries = dispatcher.entry_count(convention),
                "built dispatch table"
            );
        }
        Ok(dispatcher)
    }

    fn entries(&self, convention: Convention) -> Option<&Entries<R>> {
        match convention {
            Convention::Scalar => self.scalar.as_ref(),
            Convention::Array => self.array.as_ref(),
            Convention::NdArray => self.ndarray.as_ref(),
        }
    }

    /// Number of `(dtype, kernel)` pairs registered for `convention`.
    pub fn entry_count(&self, convention: Convention) -> usize {
        self.entries(convention).map_or(0, Vec::len)
    }

    /// The kernel that a call with `convention` and `dtype` would run.
    ///
    /// The first entry whose data type matches wins; otherwise the first
    /// `generic` entry is used.
    pub fn resolve(&self, convention: Convention, dtype: DType) -> Result<&Kernel<R>> {
        let entries = self
            .entries(convention)
            .ok_or(DispatchError::MissingConvention(convention))?;
        if let Some((_, k)) = entries.iter().find(|(d, _)| *d == dtype) {
            return Ok(k);
        }
        if let Some((_, k)) = entries.iter().find(|(d, _)| *d == DType::Generic) {
            tracing::debug!(%convention, %dtype, "falling back to generic kernel");
            return Ok(k);
        }
        Err(DispatchError::NoKernel { convention, dtype })
    }

    /// Select a kernel from the convention and data type of `input` and run it.
    pub fn call(&self, input: &Input<'_>) -> Result<R> {
        let kernel = self.resolve(input.convention(), input.dtype())?;
        Ok(kernel(input))
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for c in Convention::ALL {
            let dtypes = self
                .entries(c)
                .map(|e| e.iter().map(|(d, _)| *d).collect::<Vec<_>>());
            map.entry(&c.as_str(), &dtypes);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ArrayRef;
    use strided_traits::ErrorKind;

    fn tagged(tag: &'static str) -> TableItem<&'static str> {
        TableItem::kernel(move |_| tag)
    }

    #[test]
    fn test_scalar_and_generic_array() {
        let d = dispatch(
            DispatchTable::new()
                .scalar(vec![TableItem::dtype("number"), tagged("f1")])
                .array(vec![TableItem::dtype("generic"), tagged("f2")]),
        )
        .unwrap();
        assert_eq!(d.call(&Input::from(5.0f64)).unwrap(), "f1");
        let x = [1.0f64, 2.0, 3.0];
        assert_eq!(d.call(&Input::Array(ArrayRef::Generic(&x))).unwrap(), "f2");
        // Typed arrays without their own entry fall back to `generic`.
        assert_eq!(d.call(&Input::Array(ArrayRef::Float64(&x))).unwrap(), "f2");
    }

    #[test]
    fn test_first_match_wins() {
        let d = dispatch(DispatchTable::new().array(vec![
            TableItem::dtype("generic"),
            tagged("generic"),
            TableItem::dtype("float32"),
            tagged("first"),
            TableItem::dtype("float32"),
            tagged("second"),
        ]))
        .unwrap();
        let x = [1.0f32];
        assert_eq!(d.call(&Input::Array(ArrayRef::Float32(&x))).unwrap(), "first");
        assert_eq!(d.entry_count(Convention::Array), 3);
    }

    #[test]
    fn test_odd_length_rejected_eagerly() {
        let err = dispatch(DispatchTable::new().array(vec![
            TableItem::dtype("float64"),
            tagged("a"),
            TableItem::dtype("float32"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MalformedTable {
                convention: Convention::Array,
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_misordered_pairs_rejected() {
        let err = dispatch(
            DispatchTable::new().ndarray(vec![tagged("a"), TableItem::dtype("float64")]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DispatchError::MalformedTable {
                convention: Convention::NdArray,
                reason: "expected a data type at position 0".into(),
            }
        );

        let err = dispatch(DispatchTable::<&str>::new().scalar(vec![
            TableItem::dtype("number"),
            TableItem::dtype("complex"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_unknown_dtype_rejected() {
        let err = dispatch(DispatchTable::new().array(vec![TableItem::dtype("float128"), tagged("a")]))
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownDType(_)));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_misses_at_call_time() {
        let d = dispatch(DispatchTable::new().array(vec![TableItem::dtype("float64"), tagged("a")]))
            .unwrap();
        let x = [1i32];
        let err = d.call(&Input::Array(ArrayRef::Int32(&x))).unwrap_err();
        assert_eq!(
            err,
            DispatchError::NoKernel {
                convention: Convention::Array,
                dtype: DType::Int32,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Dispatch);

        let err = d.call(&Input::from(1.0f64)).unwrap_err();
        assert_eq!(err, DispatchError::MissingConvention(Convention::Scalar));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_debug_lists_dtypes_per_convention() {
        let d = dispatch(DispatchTable::new().array(vec![
            TableItem::dtype("float64"),
            tagged("a"),
            TableItem::dtype("generic"),
            tagged("b"),
        ]))
        .unwrap();
        assert_eq!(
            format!("{d:?}"),
            r#"{"scalar": None, "array": Some([Float64, Generic]), "ndarray": None}"#
        );
    }

    #[test]
    fn test_kernel_sees_input() {
        let d = dispatch(DispatchTable::new().array(vec![
            TableItem::dtype("float64"),
            TableItem::kernel(|input: &Input<'_>| match input {
                Input::Array(ArrayRef::Float64(x)) => x.iter().sum::<f64>(),
                _ => f64::NAN,
            }),
        ]))
        .unwrap();
        let x = [1.0, 2.0, 3.5];
        assert_eq!(d.call(&Input::Array(ArrayRef::Float64(&x))).unwrap(), 6.5);
    }
}
