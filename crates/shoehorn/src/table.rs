//! Column-major table model.
//!
//! A [`Table`] is an ordered sequence of named columns, each an ordered
//! sequence of cell values. All columns share the same row count, enforced
//! at build time. Cells are [`serde_json::Value`]s so heterogeneous scalar
//! data (strings, numbers, booleans) can share a table without a bespoke
//! value enum.

use serde_json::Value;

use crate::error::{Result, SquishError};

/// A named column of cell values.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Value>,
}

impl Column {
    pub(crate) fn new(name: String, cells: Vec<Value>) -> Self {
        Column { name, cells }
    }

    /// The column's header name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column's cells, in row order.
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }
}

/// An ordered collection of named, equal-length columns.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shoehorn::Table;
///
/// let table = Table::builder()
///     .column("name", [json!("Ada"), json!("Grace")])
///     .column("born", [json!(1815), json!(1906)])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.num_columns(), 2);
/// assert_eq!(table.num_rows(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table builder.
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (zero for a column-less table).
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Check whether the table has no rows to display.
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub(crate) fn from_columns(columns: Vec<Column>) -> Self {
        Table { columns }
    }
}

/// Builder for [`Table`] instances.
///
/// `build` validates that column names are unique and that every column has
/// the same number of rows.
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
}

impl TableBuilder {
    /// Add a column with the given header name and cells.
    pub fn column(
        mut self,
        name: impl Into<String>,
        cells: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.columns
            .push(Column::new(name.into(), cells.into_iter().collect()));
        self
    }

    /// Build the table, validating column names and row counts.
    pub fn build(self) -> Result<Table> {
        let expected = self.columns.first().map_or(0, |c| c.cells.len());
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(SquishError::DuplicateColumn(column.name.clone()));
            }
            if column.cells.len() != expected {
                return Err(SquishError::RaggedColumn {
                    column: column.name.clone(),
                    expected,
                    actual: column.cells.len(),
                });
            }
        }
        Ok(Table {
            columns: self.columns,
        })
    }
}

/// Render a cell value as the text the table will display.
///
/// Strings render unquoted, null renders empty, and every other scalar uses
/// its JSON text.
///
/// ```rust
/// use serde_json::json;
/// use shoehorn::cell_text;
///
/// assert_eq!(cell_text(&json!("hello")), "hello");
/// assert_eq!(cell_text(&json!(42)), "42");
/// assert_eq!(cell_text(&json!(true)), "true");
/// assert_eq!(cell_text(&json!(null)), "");
/// ```
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
