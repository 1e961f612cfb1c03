//! implore-series - Typed columnar series for scientific datasets
//!
//! This crate provides a named, typed column backed by Apache Arrow and the
//! aggregate statistics computed over it:
//!
//! - **Series**: construction from `i8`..`i64`, `f32`/`f64` or text values,
//!   with the Arrow store (`Int64`, `Float64`, `Utf8`) chosen from the
//!   declared element type
//! - **Aggregates**: sum, average, min, max, abs and median, returned in the
//!   declared element type
//! - **Preview**: a bounded `Index | Value` table for quick inspection
//!
//! # Example
//!
//! ```
//! use implore_series::{average, median, Series};
//!
//! let s = Series::new("IntSeries", vec![1i64, 2, 3, 4, 5]);
//! assert_eq!(average(&s).unwrap(), 3);
//! assert_eq!(median(&s).unwrap(), 3);
//! ```

pub mod aggregate;
pub mod config;
pub mod data;
pub mod display;
pub mod dtype;
pub mod error;
pub mod series;

pub use aggregate::*;
pub use config::*;
pub use data::*;
pub use display::*;
pub use dtype::*;
pub use error::*;
pub use series::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
