//! Prints a small roster, squeezing the long "places" column to make the
//! table fit whatever terminal runs it. Try a narrow window.

use serde_json::json;
use shoehorn::{PrintConfig, Table, TablePrinter};

fn main() -> shoehorn::Result<()> {
    let table = Table::builder()
        .column(
            "names",
            [
                json!("Albert Einstein"),
                json!("Isaac Newton"),
                json!("Stephen Hawking"),
            ],
        )
        .column(
            "places",
            [
                json!("Ulm, Germany"),
                json!("Woolsthorpe Manor, United Kingdom"),
                json!("Oxford, United Kingdom"),
            ],
        )
        .column(
            "foods",
            [json!("Spaghetti"), json!("Pasta"), json!("Noodles")],
        )
        .build()?;

    TablePrinter::new()
        .squish_column("places")
        .angel_column("foods")
        .config(PrintConfig::new().banner("Things!"))
        .print(&table)
}
