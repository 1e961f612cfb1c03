//! Series demo binary
//!
//! Builds a small integer series, prints a few aggregates and its preview.
//! Set `IMPLORE_SERIES_PREVIEW` to a JSON `PreviewConfig` to change the table.

use implore_series::{average, min, sum, PreviewConfig, Series};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("IMPLORE_SERIES_PREVIEW") {
        Ok(json) => PreviewConfig::from_json(&json)?,
        Err(_) => PreviewConfig::default(),
    };
    config.validate()?;

    let int_series = Series::new("IntSeries", vec![1i64, 2, 3, 4, 5]);

    println!("{}", sum(&int_series)?);
    println!("{}", average(&int_series)?);
    println!("{}", min(&int_series)?);
    println!("{:?}", int_series.array());
    int_series.print_with(&config);

    Ok(())
}
