//! Element kinds and the numeric type hierarchy
//!
//! Every value that can be placed in a [`Series`](crate::Series) implements
//! [`Element`], which classifies its type into a kind family. The family
//! decides which Arrow array backs the series:
//!
//! ```text
//! Element
//!   ├── Integer  (i8, i16, i32, i64, isize)  -> Int64
//!   ├── Float    (f32, f64)                  -> Float64
//!   ├── Utf8     (String, &str)              -> Utf8
//!   └── Boolean  (bool)                      -> no storage
//! ```
//!
//! [`Numeric`] refines `Element` for the integer and float families. The
//! aggregation engine is generic over it so results come back in the type the
//! caller declared rather than a fixed computation type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div};

use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};

/// Coarse classification of an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ElementKind {
    Integer,
    Float,
    Utf8,
    Boolean,
}

impl ElementKind {
    /// Arrow type of the backing store, if this kind can be stored
    pub fn storage_type(&self) -> Option<DataType> {
        match self {
            ElementKind::Integer => Some(DataType::Int64),
            ElementKind::Float => Some(DataType::Float64),
            ElementKind::Utf8 => Some(DataType::Utf8),
            ElementKind::Boolean => None,
        }
    }

    /// Classify an Arrow data type
    pub fn from_data_type(dtype: &DataType) -> Option<Self> {
        match dtype {
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
                Some(ElementKind::Integer)
            }
            DataType::Float16 | DataType::Float32 | DataType::Float64 => Some(ElementKind::Float),
            DataType::Utf8 | DataType::LargeUtf8 => Some(ElementKind::Utf8),
            DataType::Boolean => Some(ElementKind::Boolean),
            _ => None,
        }
    }

    /// Check if aggregations are defined for this kind
    pub fn is_numeric(&self) -> bool {
        matches!(self, ElementKind::Integer | ElementKind::Float)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Integer => "integer",
            ElementKind::Float => "float",
            ElementKind::Utf8 => "utf8",
            ElementKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// One element widened to its family's storage representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
    Bool(bool),
}

impl ElementValue<'_> {
    /// Kind family of this value
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementValue::Int(_) => ElementKind::Integer,
            ElementValue::Float(_) => ElementKind::Float,
            ElementValue::Text(_) => ElementKind::Utf8,
            ElementValue::Bool(_) => ElementKind::Boolean,
        }
    }
}

/// A type that can be classified into a kind family
///
/// `KIND` is the family the caller declares by choosing `Self`; `value` is
/// what an individual element actually holds. The two must agree, which the
/// series constructor checks.
pub trait Element {
    const KIND: ElementKind;

    fn value(&self) -> ElementValue<'_>;
}

/// Numeric element types accepted by the aggregation engine
///
/// The conversions narrow from the 64-bit storage types back to `Self` with
/// `as` semantics. The checked operations report integer overflow and
/// division by zero instead of panicking; for floats they always succeed.
/// `midpoint` never overflows and `total_cmp` orders NaN after every number.
pub trait Numeric:
    Element
    + Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// Convert an entry count, `None` if it does not fit in `Self`.
    fn checked_from_usize(n: usize) -> Option<Self>;

    /// Narrow a value read from an `Int64` store.
    fn from_i64(v: i64) -> Self;

    /// Narrow a value read from a `Float64` store.
    fn from_f64(v: f64) -> Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn checked_abs(self) -> Option<Self>;

    /// Mean of two values under `Self`'s division.
    fn midpoint(self, other: Self) -> Self;

    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::Integer;

            #[inline]
            fn value(&self) -> ElementValue<'_> {
                ElementValue::Int(*self as i64)
            }
        }

        impl Numeric for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn checked_from_usize(n: usize) -> Option<Self> {
                Self::try_from(n).ok()
            }
            #[inline]
            fn from_i64(v: i64) -> Self {
                v as Self
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }
            #[inline]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_div(self, rhs)
            }
            #[inline]
            fn checked_abs(self) -> Option<Self> {
                <$ty>::checked_abs(self)
            }
            #[inline]
            fn midpoint(self, other: Self) -> Self {
                // Opposite signs cannot overflow; same signs halve first.
                if (self < 0) != (other < 0) {
                    (self + other) / 2
                } else {
                    self / 2 + other / 2 + (self % 2 + other % 2) / 2
                }
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::Float;

            #[inline]
            fn value(&self) -> ElementValue<'_> {
                ElementValue::Float(f64::from(*self))
            }
        }

        impl Numeric for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn checked_from_usize(n: usize) -> Option<Self> {
                Some(n as Self)
            }
            #[inline]
            fn from_i64(v: i64) -> Self {
                v as Self
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
            #[inline]
            fn checked_abs(self) -> Option<Self> {
                Some(self.abs())
            }
            #[inline]
            fn midpoint(self, other: Self) -> Self {
                (self + other) / 2.0
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$ty>::total_cmp(self, other)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize);
impl_float!(f32, f64);

impl Element for String {
    const KIND: ElementKind = ElementKind::Utf8;

    fn value(&self) -> ElementValue<'_> {
        ElementValue::Text(self.as_str())
    }
}

impl Element for &str {
    const KIND: ElementKind = ElementKind::Utf8;

    fn value(&self) -> ElementValue<'_> {
        ElementValue::Text(self)
    }
}

impl Element for bool {
    const KIND: ElementKind = ElementKind::Boolean;

    fn value(&self) -> ElementValue<'_> {
        ElementValue::Bool(*self)
    }
}
