//! Bounded table previews of a series
//!
//! [`Series::preview`] collects the first few `(index, value)` rows into a
//! [`Preview`]; its `Display` impl renders them with comfy-table, followed by
//! a footer line when rows were left out. Only the numeric stores are wired
//! into the renderer: a text series previews with no rows.

use std::fmt;

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;

use crate::config::{PreviewConfig, TableStyle};
use crate::data::SeriesData;
use crate::series::Series;

/// The rows and footer shown for a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Displayed `(index, value)` pairs
    pub rows: Vec<(usize, String)>,
    /// Truncation note, present when fewer rows than entries are shown
    pub footer: Option<String>,
    style: TableStyle,
}

impl Preview {
    /// Build the comfy-table for the displayed rows
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(match self.style {
            TableStyle::Ascii => ASCII_FULL,
            TableStyle::Utf8 => UTF8_FULL,
        });
        table.set_header(vec!["Index", "Value"]);
        for (index, value) in &self.rows {
            table.add_row(vec![index.to_string(), value.clone()]);
        }
        table
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())?;
        if let Some(footer) = &self.footer {
            write!(f, "\n{footer}")?;
        }
        Ok(())
    }
}

impl<T> Series<T> {
    /// Collect the rows a preview would show
    pub fn preview(&self, config: &PreviewConfig) -> Preview {
        let shown = self.len().min(config.max_rows as usize);

        let rows: Vec<(usize, String)> = match self.data() {
            SeriesData::Int64(a) => (0..shown).map(|i| (i, a.value(i).to_string())).collect(),
            SeriesData::Float64(a) => (0..shown).map(|i| (i, a.value(i).to_string())).collect(),
            other => {
                tracing::trace!(
                    "No preview renderer for {} storage in series '{}'",
                    other.data_type(),
                    self.name()
                );
                Vec::new()
            }
        };

        let footer = (rows.len() < self.len())
            .then(|| format!("... Length: {}, dtype: {}", self.len(), self.data_type()));

        Preview {
            rows,
            footer,
            style: config.style,
        }
    }

    /// Render the preview to a string
    pub fn render(&self, config: &PreviewConfig) -> String {
        self.preview(config).to_string()
    }

    /// Print the default preview to stdout
    pub fn print(&self) {
        self.print_with(&PreviewConfig::default());
    }

    /// Print a preview to stdout
    pub fn print_with(&self, config: &PreviewConfig) {
        println!("{}", self.render(config));
    }
}
