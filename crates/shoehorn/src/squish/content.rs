//! Content truncation.
//!
//! [`ContentSquisher`] applies a column → target-width mapping to a table,
//! producing a derived table whose headers and cell strings each fit their
//! target width exactly. Truncated content ends in a marker (default
//! `"..."`); widths too small to hold the marker fall back to a degenerate
//! marker built from its first character.

use crate::config::DEFAULT_MARKER;
use crate::error::{Result, SquishError};
use crate::measure::char_len;
use crate::table::{cell_text, Column, Table};
use crate::widths::ColumnWidths;

/// Truncates table content to target column widths.
///
/// The squisher owns an independent copy of the width map, and `squish`
/// returns a new table; neither input is ever mutated.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shoehorn::{ColumnWidths, ContentSquisher, Table};
///
/// let table = Table::builder()
///     .column("data_name_longer", [json!("short")])
///     .build()
///     .unwrap();
///
/// let widths: ColumnWidths = [("data_name_longer", 13)].into_iter().collect();
/// let squished = ContentSquisher::new(&widths).squish(&table).unwrap();
///
/// assert_eq!(squished.columns()[0].name(), "data_name_...");
/// ```
#[derive(Clone, Debug)]
pub struct ContentSquisher {
    widths: ColumnWidths,
    marker: String,
}

impl ContentSquisher {
    /// Create a squisher for the given target widths.
    pub fn new(widths: &ColumnWidths) -> Self {
        ContentSquisher {
            widths: widths.clone(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Set the truncation marker (convention: three characters).
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Produce a derived table with headers and cells truncated to their
    /// target widths.
    ///
    /// Columns not named in the width map are copied through untouched. A
    /// width-map entry naming a column absent from the table is rejected.
    pub fn squish(&self, table: &Table) -> Result<Table> {
        for name in self.widths.names() {
            if table.column(name).is_none() {
                return Err(SquishError::UnknownColumn(name.to_string()));
            }
        }

        let columns = table
            .columns()
            .iter()
            .map(|column| match self.widths.get(column.name()) {
                Some(width) => self.squish_column(column, width),
                None => column.clone(),
            })
            .collect();

        Ok(Table::from_columns(columns))
    }

    fn squish_column(&self, column: &Column, width: usize) -> Column {
        let cells = column
            .cells()
            .iter()
            .map(|cell| self.squish_to(&cell_text(cell), width).into())
            .collect();
        Column::new(self.squish_to(column.name(), width), cells)
    }

    /// Truncate `text` so the result is exactly `width` characters, marker
    /// included. Text already within the width is returned unchanged.
    fn squish_to(&self, text: &str, width: usize) -> String {
        if char_len(text) <= width {
            return text.to_string();
        }

        if width > char_len(&self.marker) {
            squish_line(text, width, &self.marker)
        } else {
            // Width can't hold the marker: degrade to width − 1 repetitions
            // of its first character (one bare character at width 1,
            // nothing at width 0).
            let degenerate = self
                .marker
                .chars()
                .next()
                .map(|c| c.to_string().repeat(width.saturating_sub(1)))
                .unwrap_or_default();
            squish_line(text, width, &degenerate)
        }
    }
}

/// Keep the head of `text`, overwriting the tail with `marker`, for a result
/// of exactly `width` characters.
fn squish_line(text: &str, width: usize, marker: &str) -> String {
    let keep = width.saturating_sub(char_len(marker));
    let mut line: String = text.chars().take(keep).collect();
    line.push_str(marker);
    line
}
