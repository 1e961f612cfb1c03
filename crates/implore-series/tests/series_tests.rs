//! Integration tests for series construction, storage and previews

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int64Array};
use arrow::datatypes::DataType;
use implore_series::{
    abs_values, sum, ElementKind, PreviewConfig, Series, SeriesData, SeriesError, TableStyle,
};
use proptest::prelude::*;
use rstest::rstest;

// === Construction ===

#[test]
fn test_int_series_storage() {
    let s = Series::new("IntSeries", vec![1i64, 2, 3, 4, 5]);
    assert_eq!(s.name(), "IntSeries");
    assert_eq!(s.data_type(), &DataType::Int64);
    assert_eq!(s.data().len(), 5);
}

#[rstest]
#[case(ElementKind::Integer, DataType::Int64)]
#[case(ElementKind::Float, DataType::Float64)]
#[case(ElementKind::Utf8, DataType::Utf8)]
fn test_kind_selects_storage(#[case] kind: ElementKind, #[case] dtype: DataType) {
    let resolved = match kind {
        ElementKind::Integer => Series::new("s", vec![1i16]).data_type().clone(),
        ElementKind::Float => Series::new("s", vec![1.0f32]).data_type().clone(),
        ElementKind::Utf8 => Series::new("s", vec!["x"]).data_type().clone(),
        ElementKind::Boolean => unreachable!(),
    };
    assert_eq!(resolved, dtype);
}

#[test]
fn test_bool_series_unsupported() {
    let err = Series::try_new("flags", vec![true, false, true]).unwrap_err();
    assert_eq!(
        err,
        SeriesError::UnsupportedType {
            kind: ElementKind::Boolean
        }
    );
}

#[test]
fn test_series_from_existing_array() {
    let array: ArrayRef = Arc::new(Int64Array::from(vec![5, -5]));
    let s: Series<i64> = Series::from_array("wrapped", array).unwrap();
    assert_eq!(sum(&s).unwrap(), 0);
}

// === Round Trip ===

#[test]
fn test_text_round_trip() {
    let input = vec!["alpha".to_string(), "".to_string(), "gamma".to_string()];
    let s = Series::new("t", input.clone());
    let SeriesData::Utf8(array) = s.data() else {
        panic!("expected Utf8 storage");
    };
    let read: Vec<String> = (0..array.len()).map(|i| array.value(i).to_string()).collect();
    assert_eq!(read, input);
}

#[test]
fn test_abs_values_keeps_order() {
    let s = Series::new("s", vec![-1.5f64, 2.0, -0.25]);
    let a = abs_values(&s).unwrap();
    assert_eq!(a.to_vec().unwrap(), vec![1.5, 2.0, 0.25]);
}

proptest! {
    #[test]
    fn test_int_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let s = Series::new("s", values.clone());
        let SeriesData::Int64(array) = s.data() else {
            panic!("expected Int64 storage");
        };
        let read: Vec<i32> = (0..array.len()).map(|i| array.value(i) as i32).collect();
        prop_assert_eq!(read, values);
    }

    #[test]
    fn test_float_round_trip(values in prop::collection::vec(-1e12f64..1e12, 0..100)) {
        let s = Series::new("s", values.clone());
        prop_assert_eq!(s.to_vec().unwrap(), values);
    }
}

// === Preview ===

#[test]
fn test_preview_eleven_rows_truncates() {
    let s = Series::new("s", (1..=11).collect::<Vec<i64>>());
    let preview = s.preview(&PreviewConfig::default());
    assert_eq!(preview.rows.len(), 10);
    let footer = preview.footer.unwrap();
    assert!(footer.contains("Length: 11"));
    assert!(footer.contains("Int64"));
}

#[test]
fn test_preview_five_rows_no_footer() {
    let s = Series::new("s", vec![1.0f64, 2.0, 3.0, 4.0, 5.0]);
    let preview = s.preview(&PreviewConfig::default());
    assert_eq!(preview.rows.len(), 5);
    assert!(preview.footer.is_none());
}

#[test]
fn test_render_utf8_style() {
    let s = Series::new("s", vec![1i64]);
    let out = s.render(&PreviewConfig::new().with_style(TableStyle::Utf8));
    assert!(out.contains('│'));
    assert!(out.contains("Index"));
}

#[test]
fn test_render_line_count() {
    let s = Series::new("s", vec![1i64, 2, 3]);
    let ascii = s.render(&PreviewConfig::default());
    let data_lines = ascii
        .lines()
        .filter(|line| line.starts_with('|') && !line.contains("Index"))
        .count();
    assert_eq!(data_lines, 3);
}
