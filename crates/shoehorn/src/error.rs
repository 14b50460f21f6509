//! Error types for table fitting and printing.

use thiserror::Error;

/// Errors that can occur when fitting or printing a table.
///
/// Unknown column references are programmer errors and are rejected eagerly
/// at the boundary of the component that receives them. An over-tight width
/// budget is *not* an error: the calculator terminates with its best-effort
/// widths instead.
#[derive(Debug, Error)]
pub enum SquishError {
    /// The squish column names a column absent from the width map.
    #[error("squish column '{0}' does not exist")]
    UnknownSquishColumn(String),

    /// The angel column names a column absent from the width map.
    #[error("angel column '{0}' does not exist")]
    UnknownAngelColumn(String),

    /// A width-map entry names a column absent from the table.
    #[error("column '{0}' is not present in the table")]
    UnknownColumn(String),

    /// Two table columns share the same name.
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    /// A table column's row count differs from its siblings.
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shoehorn operations.
pub type Result<T> = std::result::Result<T, SquishError>;
