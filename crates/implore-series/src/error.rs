//! Error types for implore-series
//!
//! Every failure the container or the aggregation engine can report is a
//! variant of [`SeriesError`]. They all indicate misuse (wrong element type,
//! missing emptiness guard) rather than a data condition, so callers usually
//! propagate them with `?` instead of recovering.

use arrow::datatypes::DataType;
use thiserror::Error;

use crate::dtype::ElementKind;

/// Errors raised while building or reducing a series
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// The declared element type has no backing storage
    #[error("Unsupported element type: {kind} values cannot be stored in a series")]
    UnsupportedType { kind: ElementKind },

    /// The declared element type disagrees with the values or array supplied
    #[error("Kind mismatch: series declared as {expected}, got {actual} values")]
    KindMismatch {
        expected: ElementKind,
        actual: ElementKind,
    },

    /// The operation is not implemented for this storage variant
    #[error("{operation} is not supported for {dtype} storage")]
    UnsupportedStorage {
        operation: &'static str,
        dtype: DataType,
    },

    /// The operation needs at least one entry
    #[error("Cannot compute {operation} of an empty series")]
    EmptyInput { operation: &'static str },

    /// Read past the end of the backing store
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Division by a zero entry count
    #[error("Division by zero while computing {operation}")]
    DivideByZero { operation: &'static str },

    /// Integer accumulation exceeded the declared type
    #[error("Integer overflow while computing {operation}")]
    Overflow { operation: &'static str },
}

/// Result type for series operations
pub type SeriesResult<T> = Result<T, SeriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_display() {
        let err = SeriesError::UnsupportedType {
            kind: ElementKind::Boolean,
        };
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn test_unsupported_storage_display() {
        let err = SeriesError::UnsupportedStorage {
            operation: "sum",
            dtype: DataType::Utf8,
        };
        assert_eq!(err.to_string(), "sum is not supported for Utf8 storage");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = SeriesError::IndexOutOfRange { index: 0, len: 0 };
        assert!(err.to_string().contains("index 0, length 0"));
    }
}
