//! The grid-renderer seam.
//!
//! The fitting core never renders anything itself: it hands a derived table
//! and its finalized widths to a [`GridRenderer`]. [`PlainGrid`] is the
//! bundled implementation — space-padded cells, a two-space column gap, and
//! a centered banner line. Anything fancier (borders, color, alignment
//! options) belongs to the collaborator, not to this crate.

use std::io::{self, Write};

use crate::measure::char_len;
use crate::table::{cell_text, Table};

/// Renders a fitted table to some output.
pub trait GridRenderer {
    /// Write a banner line sized to the screen width.
    fn banner(&mut self, text: &str, width: usize) -> io::Result<()>;

    /// Write the table, one column per entry in `widths` (aligned to the
    /// table's column order).
    fn table(&mut self, table: &Table, widths: &[usize]) -> io::Result<()>;
}

/// A minimal renderer: left-aligned cells padded to their column width,
/// separated by two spaces.
pub struct PlainGrid<W: Write> {
    out: W,
}

const COLUMN_GAP: &str = "  ";

impl<W: Write> PlainGrid<W> {
    /// Create a plain grid writing to `out`.
    pub fn new(out: W) -> Self {
        PlainGrid { out }
    }

    /// Consume the grid, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_row(&mut self, cells: &[String], widths: &[usize]) -> io::Result<()> {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(width.saturating_sub(char_len(cell))));
        }
        writeln!(self.out, "{}", line.trim_end())
    }
}

impl<W: Write> GridRenderer for PlainGrid<W> {
    fn banner(&mut self, text: &str, width: usize) -> io::Result<()> {
        let pad = width.saturating_sub(char_len(text)) / 2;
        writeln!(self.out, "{}{}", " ".repeat(pad), text)
    }

    fn table(&mut self, table: &Table, widths: &[usize]) -> io::Result<()> {
        let headers: Vec<String> = table.column_names().map(String::from).collect();
        self.write_row(&headers, widths)?;

        for row in 0..table.num_rows() {
            let cells: Vec<String> = table
                .columns()
                .iter()
                .map(|c| cell_text(&c.cells()[row]))
                .collect();
            self.write_row(&cells, widths)?;
        }
        Ok(())
    }
}
