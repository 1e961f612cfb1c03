//! Backing storage for a series
//!
//! A series owns exactly one Arrow array. [`SeriesData`] is the closed set of
//! array variants the crate knows how to build and read; everything else in
//! the crate matches on it instead of downcasting `dyn Array` at each call.

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, Float64Array, Float64Builder, Int64Array, Int64Builder, StringArray,
    StringBuilder,
};
use arrow::datatypes::DataType;

use crate::dtype::{Element, ElementKind, ElementValue};
use crate::error::{SeriesError, SeriesResult};

/// The Arrow array holding a series' values
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    Int64(Int64Array),
    Float64(Float64Array),
    Utf8(StringArray),
}

impl SeriesData {
    /// Build the store matching `T`'s kind from a sequence of values
    ///
    /// Values are widened within their family. An element whose runtime
    /// family differs from `T::KIND` aborts the build.
    pub fn build<T, I>(values: I) -> SeriesResult<Self>
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (capacity, _) = values.size_hint();

        match T::KIND {
            ElementKind::Integer => {
                let mut builder = Int64Builder::with_capacity(capacity);
                for v in values {
                    match v.value() {
                        ElementValue::Int(x) => builder.append_value(x),
                        other => return Err(mismatch::<T>(other)),
                    }
                }
                Ok(SeriesData::Int64(builder.finish()))
            }
            ElementKind::Float => {
                let mut builder = Float64Builder::with_capacity(capacity);
                for v in values {
                    match v.value() {
                        ElementValue::Float(x) => builder.append_value(x),
                        other => return Err(mismatch::<T>(other)),
                    }
                }
                Ok(SeriesData::Float64(builder.finish()))
            }
            ElementKind::Utf8 => {
                let mut builder = StringBuilder::new();
                for v in values {
                    match v.value() {
                        ElementValue::Text(s) => builder.append_value(s),
                        other => return Err(mismatch::<T>(other)),
                    }
                }
                Ok(SeriesData::Utf8(builder.finish()))
            }
            kind => Err(SeriesError::UnsupportedType { kind }),
        }
    }

    /// Wrap an existing Arrow array, if its type is one of the variants
    pub fn from_array(array: &dyn Array) -> Option<Self> {
        let any = array.as_any();
        match array.data_type() {
            DataType::Int64 => any.downcast_ref::<Int64Array>().cloned().map(Self::Int64),
            DataType::Float64 => any
                .downcast_ref::<Float64Array>()
                .cloned()
                .map(Self::Float64),
            DataType::Utf8 => any.downcast_ref::<StringArray>().cloned().map(Self::Utf8),
            _ => None,
        }
    }

    /// Kind family of the active variant
    pub fn kind(&self) -> ElementKind {
        match self {
            SeriesData::Int64(_) => ElementKind::Integer,
            SeriesData::Float64(_) => ElementKind::Float,
            SeriesData::Utf8(_) => ElementKind::Utf8,
        }
    }

    /// Arrow data type of the active variant
    pub fn data_type(&self) -> &DataType {
        self.as_array().data_type()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.as_array().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the store as a type-erased Arrow array
    pub fn as_array(&self) -> &dyn Array {
        match self {
            SeriesData::Int64(a) => a,
            SeriesData::Float64(a) => a,
            SeriesData::Utf8(a) => a,
        }
    }

    /// Shared handle to the store (Arrow buffers are reference counted)
    pub fn to_array_ref(&self) -> ArrayRef {
        match self {
            SeriesData::Int64(a) => Arc::new(a.clone()),
            SeriesData::Float64(a) => Arc::new(a.clone()),
            SeriesData::Utf8(a) => Arc::new(a.clone()),
        }
    }
}

fn mismatch<T: Element>(actual: ElementValue<'_>) -> SeriesError {
    SeriesError::KindMismatch {
        expected: T::KIND,
        actual: actual.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Declares itself as an integer but carries text.
    struct Mislabelled(&'static str);

    impl Element for Mislabelled {
        const KIND: ElementKind = ElementKind::Integer;

        fn value(&self) -> ElementValue<'_> {
            ElementValue::Text(self.0)
        }
    }

    #[test]
    fn test_build_int_widens() {
        let data = SeriesData::build(vec![1i32, -2, 3]).unwrap();
        match &data {
            SeriesData::Int64(a) => assert_eq!(a.values().to_vec(), vec![1i64, -2, 3]),
            other => panic!("expected Int64 storage, got {:?}", other.data_type()),
        }
        assert_eq!(data.data_type(), &DataType::Int64);
    }

    #[test]
    fn test_build_text() {
        let data = SeriesData::build(vec!["a", "bc"]).unwrap();
        assert_eq!(data.kind(), ElementKind::Utf8);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_build_empty() {
        let data = SeriesData::build(Vec::<f64>::new()).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.data_type(), &DataType::Float64);
    }

    #[test]
    fn test_build_bool_rejected() {
        let err = SeriesData::build(vec![true, false]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::UnsupportedType {
                kind: ElementKind::Boolean
            }
        );
    }

    #[test]
    fn test_build_mislabelled_rejected() {
        let err = SeriesData::build(vec![Mislabelled("7")]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::KindMismatch {
                expected: ElementKind::Integer,
                actual: ElementKind::Utf8
            }
        );
    }

    #[test]
    fn test_from_array() {
        let array: ArrayRef = Arc::new(Float64Array::from(vec![1.5, 2.5]));
        let data = SeriesData::from_array(array.as_ref()).unwrap();
        assert_eq!(data.kind(), ElementKind::Float);

        let array: ArrayRef = Arc::new(arrow::array::Int32Array::from(vec![1, 2]));
        assert!(SeriesData::from_array(array.as_ref()).is_none());
    }
}
