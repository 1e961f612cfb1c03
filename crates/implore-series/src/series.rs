//! Named, typed columns
//!
//! A [`Series<T>`] pairs a name with one Arrow array. `T` is the element type
//! the caller declared; it decides the storage variant at construction and
//! the result type of every aggregation. The series is read-only afterwards.

use std::fmt;
use std::marker::PhantomData;

use arrow::array::ArrayRef;
use arrow::datatypes::DataType;

use crate::data::SeriesData;
use crate::dtype::{Element, ElementKind};
use crate::error::{SeriesError, SeriesResult};

/// A named column of values declared as `T`
pub struct Series<T> {
    name: String,
    kind: ElementKind,
    dtype: DataType,
    data: SeriesData,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> Series<T> {
    /// Build a series, selecting the backing store from `T`'s kind
    ///
    /// Fails with [`SeriesError::UnsupportedType`] when `T` has no storage
    /// (e.g. `bool`) and with [`SeriesError::KindMismatch`] when an element's
    /// value does not belong to the family `T` declares.
    pub fn try_new<I>(name: impl Into<String>, values: I) -> SeriesResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let name = name.into();
        let data = SeriesData::build(values)?;
        let series = Self::from_parts(name, data);
        tracing::debug!(
            "Built series '{}' with {} {} values",
            series.name,
            series.len(),
            series.dtype
        );
        Ok(series)
    }

    /// Build a series, panicking on an unsupported element type
    ///
    /// An unsupported `T` is a programming error; use [`Series::try_new`] to
    /// handle it as a value instead.
    pub fn new<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match Self::try_new(name, values) {
            Ok(series) => series,
            Err(e) => panic!("cannot build series: {e}"),
        }
    }

    /// Wrap an existing Arrow array
    ///
    /// The array must be one of the supported storage types and belong to
    /// the same kind family as `T`.
    pub fn from_array(name: impl Into<String>, array: ArrayRef) -> SeriesResult<Self> {
        if T::KIND.storage_type().is_none() {
            return Err(SeriesError::UnsupportedType { kind: T::KIND });
        }

        let data = SeriesData::from_array(array.as_ref()).ok_or_else(|| {
            SeriesError::UnsupportedStorage {
                operation: "from_array",
                dtype: array.data_type().clone(),
            }
        })?;

        if data.kind() != T::KIND {
            return Err(SeriesError::KindMismatch {
                expected: T::KIND,
                actual: data.kind(),
            });
        }

        Ok(Self::from_parts(name.into(), data))
    }

    fn from_parts(name: String, data: SeriesData) -> Self {
        Self {
            name,
            kind: data.kind(),
            dtype: data.data_type().clone(),
            data,
            _marker: PhantomData,
        }
    }
}

impl<T> Series<T> {
    /// Get the series name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the Arrow data type of the backing store
    pub fn data_type(&self) -> &DataType {
        &self.dtype
    }

    /// Get the backing store
    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    /// Get the resolved kind family
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Shared handle to the backing Arrow array
    pub fn array(&self) -> ArrayRef {
        self.data.to_array_ref()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Clone for Series<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            dtype: self.dtype.clone(),
            data: self.data.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Series<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Series")
            .field("name", &self.name)
            .field("dtype", &self.dtype)
            .field("len", &self.len())
            .finish()
    }
}
