//! # Shoehorn - Tables That Fit the Terminal
//!
//! `shoehorn` prints tabular data within the width the terminal actually
//! has. When the columns' natural widths overflow the screen, it shrinks
//! them iteratively, a bounded slice at a time, in a configurable priority
//! order, then truncates headers and cells to the widths it settled on.
//!
//! ## Core Concepts
//!
//! - [`Table`]: ordered named columns of scalar cells, equal row counts
//! - [`WidthCalculator`]: shrinks natural widths to fit a budget
//! - [`ContentSquisher`]: truncates headers and cells to target widths
//! - [`TablePrinter`]: measures, fits, and prints in one call
//! - **Squish column**: the first candidate for shrinking
//! - **Angel column**: spared until no other reduction suffices
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use shoehorn::{PrintConfig, Table, TablePrinter};
//!
//! let table = Table::builder()
//!     .column("names", [json!("Albert Einstein"), json!("Isaac Newton")])
//!     .column("places", [json!("Ulm, Germany"), json!("Woolsthorpe Manor, United Kingdom")])
//!     .column("foods", [json!("Spaghetti"), json!("Pasta")])
//!     .build()
//!     .unwrap();
//!
//! let printer = TablePrinter::new()
//!     .squish_column("places")
//!     .angel_column("foods")
//!     .config(PrintConfig::new().banner("Things!"));
//!
//! // Fits to the detected terminal width and prints to stdout.
//! printer.print(&table).unwrap();
//! ```
//!
//! ## How Fitting Works
//!
//! Each column's natural width is the larger of its header and its widest
//! stringified cell. If the total exceeds the budget, columns are visited
//! in priority order (squish column, then ordinary columns in declaration
//! order, then the angel column) and each visit removes either the whole
//! overflow or at most a fraction of the column's width
//! ([`PrintConfig::max_squish_ratio`], default 20%), whichever is smaller.
//! Passes repeat until the table fits or nothing more can be removed, so
//! even a zero budget terminates with a best-effort layout.
//!
//! Truncated content ends in a marker (default `"..."`); a width too small
//! for the marker degrades to dots, so a 19-character header squeezed into
//! two columns renders as `c.`.
//!
//! ## Deterministic Fitting
//!
//! [`TablePrinter::fit_width`] takes an explicit budget instead of reading
//! the terminal, which is what tests (and layout-sensitive callers) want:
//!
//! ```rust
//! use serde_json::json;
//! use shoehorn::{Table, TablePrinter};
//!
//! let table = Table::builder()
//!     .column("normal", [json!("x".repeat(20))])
//!     .column("squishable", [json!("y".repeat(16))])
//!     .build()
//!     .unwrap();
//!
//! let fit = TablePrinter::new()
//!     .squish_column("squishable")
//!     .fit_width(&table, 34)
//!     .unwrap();
//!
//! assert_eq!(fit.widths, vec![20, 14]);
//! ```

mod config;
mod error;
mod grid;
mod measure;
mod printer;
mod squish;
mod table;
mod widths;

pub use config::{
    PrintConfig, DEFAULT_BANNER, DEFAULT_EMPTY_BANNER, DEFAULT_MARKER, DEFAULT_MAX_SQUISH_RATIO,
    DEFAULT_SCREEN_PADDING,
};
pub use error::{Result, SquishError};
pub use grid::{GridRenderer, PlainGrid};
pub use measure::natural_widths;
pub use printer::{ScreenFit, TablePrinter, DEFAULT_SCREEN_WIDTH};
pub use squish::{ContentSquisher, WidthCalculator};
pub use table::{cell_text, Column, Table, TableBuilder};
pub use widths::ColumnWidths;
