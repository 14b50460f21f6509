//! Natural width measurement.
//!
//! A column's natural width is the width it would need to display its header
//! and every cell with no truncation. Widths are character counts — display
//! cells (wide glyphs, ANSI sequences) are out of scope for this crate.

use crate::table::{cell_text, Column, Table};
use crate::widths::ColumnWidths;

/// Character count of a string.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Widest stringified cell in a column (zero for an empty column).
fn widest_cell(column: &Column) -> usize {
    column
        .cells()
        .iter()
        .map(|v| char_len(&cell_text(v)))
        .max()
        .unwrap_or(0)
}

/// Measure the natural width of every column in declaration order.
///
/// Each width is the maximum of the header's length and the longest
/// stringified cell.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shoehorn::{natural_widths, Table};
///
/// let table = Table::builder()
///     .column("id", [json!(1234567)])
///     .column("status", [json!("ok")])
///     .build()
///     .unwrap();
///
/// let widths = natural_widths(&table);
/// assert_eq!(widths.get("id"), Some(7));      // cell wins
/// assert_eq!(widths.get("status"), Some(6));  // header wins
/// ```
pub fn natural_widths(table: &Table) -> ColumnWidths {
    table
        .columns()
        .iter()
        .map(|c| (c.name().to_string(), char_len(c.name()).max(widest_cell(c))))
        .collect()
}
