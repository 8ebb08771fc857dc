//! User-supplied dispatch tables.

use std::fmt;
use std::sync::Arc;

use crate::input::{Convention, Input};

/// A dispatchable kernel.
pub type Kernel<R> = Arc<dyn Fn(&Input<'_>) -> R + Send + Sync>;

/// One entry of an interleaved `[dtype, kernel, dtype, kernel, ...]` list.
pub enum TableItem<R> {
    DType(String),
    Kernel(Kernel<R>),
}

impl<R> TableItem<R> {
    pub fn dtype(name: impl Into<String>) -> Self {
        TableItem::DType(name.into())
    }

    pub fn kernel(f: impl Fn(&Input<'_>) -> R + Send + Sync + 'static) -> Self {
        TableItem::Kernel(Arc::new(f))
    }
}

impl<R> Clone for TableItem<R> {
    fn clone(&self) -> Self {
        match self {
            TableItem::DType(name) => TableItem::DType(name.clone()),
            TableItem::Kernel(k) => TableItem::Kernel(Arc::clone(k)),
        }
    }
}

impl<R> fmt::Debug for TableItem<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableItem::DType(name) => f.debug_tuple("DType").field(name).finish(),
            TableItem::Kernel(_) => f.write_str("Kernel(..)"),
        }
    }
}

/// Unvalidated lookup lists keyed by calling convention.
///
/// Conventions left unset are absent from the built dispatcher; calling it
/// with such an input is an error.
pub struct DispatchTable<R> {
    pub(crate) scalar: Option<Vec<TableItem<R>>>,
    pub(crate) array: Option<Vec<TableItem<R>>>,
    pub(crate) ndarray: Option<Vec<TableItem<R>>>,
}

impl<R> Default for DispatchTable<R> {
    fn default() -> Self {
        Self {
            scalar: None,
            array: None,
            ndarray: None,
        }
    }
}

impl<R> DispatchTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(self, items: Vec<TableItem<R>>) -> Self {
        self.with(Convention::Scalar, items)
    }

    pub fn array(self, items: Vec<TableItem<R>>) -> Self {
        self.with(Convention::Array, items)
    }

    pub fn ndarray(self, items: Vec<TableItem<R>>) -> Self {
        self.with(Convention::NdArray, items)
    }

    /// Set the list for `convention`, replacing any previous one.
    pub fn with(mut self, convention: Convention, items: Vec<TableItem<R>>) -> Self {
        *self.slot(convention) = Some(items);
        self
    }

    fn slot(&mut self, convention: Convention) -> &mut Option<Vec<TableItem<R>>> {
        match convention {
            Convention::Scalar => &mut self.scalar,
            Convention::Array => &mut self.array,
            Convention::NdArray => &mut self.ndarray,
        }
    }
}

impl<R> fmt::Debug for DispatchTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("scalar", &self.scalar)
            .field("array", &self.array)
            .field("ndarray", &self.ndarray)
            .finish()
    }
}
