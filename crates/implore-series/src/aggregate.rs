//! Aggregate statistics over numeric series
//!
//! Every operation reads the series' `Int64` or `Float64` store by index,
//! narrows each value to the declared type `T`, and combines them in `T`:
//! integer series divide with truncation, float series exactly. Any other
//! store is rejected with [`SeriesError::UnsupportedStorage`].
//!
//! Comparisons use `T`'s own ordering. Large `i64` values are therefore
//! compared exactly rather than after a round trip through `f64`.

use arrow::array::{Array, Float64Array, Int64Array};
use serde::Serialize;

use crate::data::SeriesData;
use crate::dtype::Numeric;
use crate::error::{SeriesError, SeriesResult};
use crate::series::Series;

/// Read-only view over the numeric stores
#[derive(Clone, Copy)]
enum NumericView<'a> {
    Int64(&'a Int64Array),
    Float64(&'a Float64Array),
}

impl<'a> NumericView<'a> {
    fn of(data: &'a SeriesData, operation: &'static str) -> SeriesResult<Self> {
        tracing::trace!("{} over {} storage", operation, data.data_type());
        match data {
            SeriesData::Int64(a) => Ok(NumericView::Int64(a)),
            SeriesData::Float64(a) => Ok(NumericView::Float64(a)),
            other => Err(SeriesError::UnsupportedStorage {
                operation,
                dtype: other.data_type().clone(),
            }),
        }
    }

    fn len(&self) -> usize {
        match self {
            NumericView::Int64(a) => a.len(),
            NumericView::Float64(a) => a.len(),
        }
    }

    fn get<T: Numeric>(&self, index: usize) -> T {
        match self {
            NumericView::Int64(a) => T::from_i64(a.value(index)),
            NumericView::Float64(a) => T::from_f64(a.value(index)),
        }
    }

    fn first<T: Numeric>(&self) -> SeriesResult<T> {
        if self.len() == 0 {
            return Err(SeriesError::IndexOutOfRange { index: 0, len: 0 });
        }
        Ok(self.get(0))
    }

    fn iter<T: Numeric>(self) -> impl Iterator<Item = T> + 'a {
        (0..self.len()).map(move |i| self.get(i))
    }
}

fn add<T: Numeric>(a: T, b: T, operation: &'static str) -> SeriesResult<T> {
    a.checked_add(b).ok_or(SeriesError::Overflow { operation })
}

/// Sum of all entries, `T::zero()` for an empty series
pub fn sum<T: Numeric>(series: &Series<T>) -> SeriesResult<T> {
    let view = NumericView::of(series.data(), "sum")?;
    view.iter::<T>().try_fold(T::zero(), |acc, v| add(acc, v, "sum"))
}

/// Sum divided by the entry count, using `T`'s division
pub fn average<T: Numeric>(series: &Series<T>) -> SeriesResult<T> {
    let total = sum(series)?;
    if series.is_empty() {
        return Err(SeriesError::DivideByZero {
            operation: "average",
        });
    }
    match T::checked_from_usize(series.len()) {
        Some(count) => total.checked_div(count).ok_or(SeriesError::DivideByZero {
            operation: "average",
        }),
        // |sum| <= T::MAX < len, so the truncated mean is zero.
        None => Ok(T::zero()),
    }
}

/// Smallest entry
pub fn min<T: Numeric>(series: &Series<T>) -> SeriesResult<T> {
    let view = NumericView::of(series.data(), "min")?;
    let first = view.first::<T>()?;
    Ok(view
        .iter::<T>()
        .skip(1)
        .fold(first, |acc, v| if v < acc { v } else { acc }))
}

/// Largest entry
pub fn max<T: Numeric>(series: &Series<T>) -> SeriesResult<T> {
    let view = NumericView::of(series.data(), "max")?;
    let first = view.first::<T>()?;
    Ok(view
        .iter::<T>()
        .skip(1)
        .fold(first, |acc, v| if v > acc { v } else { acc }))
}

/// Absolute-value reduction, kept compatible with the reference behavior
///
/// Starts from entry 0 and, once per remaining entry, replaces the running
/// value with its absolute value. The later entries are never read, so the
/// result is `|values[0]|` for two or more entries and `values[0]` itself for
/// a single entry. Use [`abs_values`] for the elementwise transform.
pub fn abs<T: Numeric>(series: &Series<T>) -> SeriesResult<T> {
    let view = NumericView::of(series.data(), "abs")?;
    let mut acc = view.first::<T>()?;
    for _ in 1..view.len() {
        acc = acc.checked_abs().ok_or(SeriesError::Overflow { operation: "abs" })?;
    }
    Ok(acc)
}

/// Middle value; the mean of the two central values for even counts
///
/// Floats sort in IEEE total order, so NaN entries sit above every number
/// regardless of where they appear in the input.
pub fn median<T: Numeric>(series: &Series<T>) -> SeriesResult<T> {
    let view = NumericView::of(series.data(), "median")?;
    let mut values: Vec<T> = view.iter().collect();
    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    if n == 0 {
        return Err(SeriesError::EmptyInput {
            operation: "median",
        });
    }
    if n % 2 == 1 {
        return Ok(values[n / 2]);
    }

    Ok(values[n / 2 - 1].midpoint(values[n / 2]))
}

/// Elementwise absolute value, as a new series with the same name
pub fn abs_values<T: Numeric>(series: &Series<T>) -> SeriesResult<Series<T>> {
    let view = NumericView::of(series.data(), "abs_values")?;
    let values = view
        .iter::<T>()
        .map(|v| {
            v.checked_abs().ok_or(SeriesError::Overflow {
                operation: "abs_values",
            })
        })
        .collect::<SeriesResult<Vec<T>>>()?;
    Series::try_new(series.name(), values)
}

/// Summary statistics for a numeric series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary<T> {
    /// Number of values
    pub count: usize,
    /// Sum of all values
    pub sum: T,
    /// Mean (average)
    pub mean: T,
    /// Minimum value
    pub min: T,
    /// Maximum value
    pub max: T,
    /// Median (50th percentile)
    pub median: T,
}

/// Compute the summary statistics of a non-empty series
pub fn describe<T: Numeric>(series: &Series<T>) -> SeriesResult<SeriesSummary<T>> {
    if series.is_empty() {
        return Err(SeriesError::EmptyInput {
            operation: "describe",
        });
    }

    Ok(SeriesSummary {
        count: series.len(),
        sum: sum(series)?,
        mean: average(series)?,
        min: min(series)?,
        max: max(series)?,
        median: median(series)?,
    })
}

impl<T: Numeric> Series<T> {
    /// Copy the values back out in the declared type
    pub fn to_vec(&self) -> SeriesResult<Vec<T>> {
        Ok(NumericView::of(self.data(), "to_vec")?.iter().collect())
    }
}
