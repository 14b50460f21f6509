//! The printing orchestrator.
//!
//! [`TablePrinter`] wires the pieces together: measure the table's natural
//! widths, shrink them to the screen budget, truncate the content, then hand
//! the derived table and its widths to a [`GridRenderer`]. The printer is
//! the only place terminal geometry is consulted; the fitting core below it
//! is purely computational.

use std::io;

use crate::config::PrintConfig;
use crate::error::Result;
use crate::grid::{GridRenderer, PlainGrid};
use crate::measure::natural_widths;
use crate::squish::{ContentSquisher, WidthCalculator};
use crate::table::Table;

/// Screen width assumed when terminal geometry is unavailable.
pub const DEFAULT_SCREEN_WIDTH: usize = 80;

/// The result of fitting a table to a width budget.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenFit {
    /// The budget the table was fitted to.
    pub screen_width: usize,
    /// Final width per column, aligned to the table's column order.
    pub widths: Vec<usize>,
    /// The derived table with truncated headers and cells.
    pub table: Table,
}

/// Fits tables to the terminal and prints them.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shoehorn::{Table, TablePrinter};
///
/// let table = Table::builder()
///     .column("names", [json!("Albert Einstein"), json!("Isaac Newton")])
///     .column("places", [json!("Ulm, Germany"), json!("Woolsthorpe Manor, United Kingdom")])
///     .build()
///     .unwrap();
///
/// let printer = TablePrinter::new().squish_column("places");
/// let fit = printer.fit_width(&table, 40).unwrap();
///
/// assert!(fit.widths.iter().sum::<usize>() <= 40);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TablePrinter {
    config: PrintConfig,
    squish_column: Option<String>,
    angel_column: Option<String>,
}

impl TablePrinter {
    /// Create a printer with the default configuration and no role columns.
    pub fn new() -> Self {
        TablePrinter::default()
    }

    /// Designate the column shrunk first. Validated against the table when
    /// fitting.
    pub fn squish_column(mut self, name: impl Into<String>) -> Self {
        self.squish_column = Some(name.into());
        self
    }

    /// Designate the column spared until nothing else suffices. Validated
    /// against the table when fitting.
    pub fn angel_column(mut self, name: impl Into<String>) -> Self {
        self.angel_column = Some(name.into());
        self
    }

    /// Replace the printer's configuration.
    pub fn config(mut self, config: PrintConfig) -> Self {
        self.config = config;
        self
    }

    /// Fit the table to an explicit width budget.
    pub fn fit_width(&self, table: &Table, budget: usize) -> Result<ScreenFit> {
        let natural = natural_widths(table);

        let mut calculator = WidthCalculator::new(budget, &natural)
            .max_squish_ratio(self.config.max_squish_ratio);
        if let Some(name) = &self.squish_column {
            calculator = calculator.squish_column(name.clone())?;
        }
        if let Some(name) = &self.angel_column {
            calculator = calculator.angel_column(name.clone())?;
        }
        let fitted = calculator.squish_columns();

        let derived = ContentSquisher::new(&fitted)
            .marker(self.config.marker.clone())
            .squish(table)?;

        Ok(ScreenFit {
            screen_width: budget,
            widths: fitted.widths(),
            table: derived,
        })
    }

    /// Fit the table to the detected terminal width, minus the configured
    /// screen padding. Falls back to [`DEFAULT_SCREEN_WIDTH`] when geometry
    /// is unavailable.
    pub fn fit(&self, table: &Table) -> Result<ScreenFit> {
        let screen = detected_screen_width().saturating_sub(self.config.screen_padding);
        self.fit_width(table, screen)
    }

    /// Render an already-computed fit: banner, empty-results banner when the
    /// table has no rows, then the grid.
    pub fn write_fit<G: GridRenderer>(&self, fit: &ScreenFit, grid: &mut G) -> Result<()> {
        grid.banner(&self.config.banner, fit.screen_width)?;
        if fit.table.is_empty() {
            grid.banner(&self.config.empty_banner, fit.screen_width)?;
        }
        grid.table(&fit.table, &fit.widths)?;
        Ok(())
    }

    /// Fit to the terminal and render through the given grid.
    pub fn write_to<G: GridRenderer>(&self, table: &Table, grid: &mut G) -> Result<()> {
        let fit = self.fit(table)?;
        self.write_fit(&fit, grid)
    }

    /// Fit to the terminal and print to stdout with the plain grid.
    pub fn print(&self, table: &Table) -> Result<()> {
        let stdout = io::stdout();
        let mut grid = PlainGrid::new(stdout.lock());
        self.write_to(table, &mut grid)
    }
}

fn detected_screen_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_SCREEN_WIDTH)
}
