//! End-to-end fitting: measurement → width calculation → content squish,
//! driven through the printer with an explicit budget.

use serde_json::json;
use shoehorn::{cell_text, PlainGrid, PrintConfig, Table, TablePrinter};

fn fixture() -> Table {
    let rows = 30;
    Table::builder()
        .column("something_good", vec![json!("FOOD".repeat(2)); rows])
        .column("something_bad", vec![json!("WORK".repeat(20)); rows])
        .column("squished", vec![json!("SQUISHABLE".repeat(4)); rows])
        .column("saved", vec![json!("CANADA".repeat(3)); rows])
        .build()
        .unwrap()
}

#[test]
fn fit_width_converges_on_the_known_layout() {
    // Natural widths are {14, 80, 40, 18}; a budget of 100 takes two full
    // passes of capped reductions to satisfy.
    let fit = TablePrinter::new()
        .squish_column("squished")
        .angel_column("saved")
        .fit_width(&fixture(), 100)
        .unwrap();

    assert_eq!(fit.screen_width, 100);
    assert_eq!(fit.widths, vec![10, 52, 26, 12]);
    assert_eq!(fit.widths.iter().sum::<usize>(), 100);
}

#[test]
fn derived_table_matches_the_fitted_widths() {
    let table = fixture();
    let fit = TablePrinter::new()
        .squish_column("squished")
        .angel_column("saved")
        .fit_width(&table, 100)
        .unwrap();

    assert_eq!(fit.table.num_rows(), table.num_rows());
    assert_eq!(fit.table.num_columns(), table.num_columns());

    for (column, &width) in fit.table.columns().iter().zip(&fit.widths) {
        assert!(column.name().chars().count() <= width);
        for cell in column.cells() {
            assert!(cell_text(cell).chars().count() <= width);
        }
    }

    // Truncated headers keep the marker convention.
    let names: Vec<&str> = fit.table.column_names().collect();
    assert_eq!(names, vec!["somethi...", "something_bad", "squished", "saved"]);
}

#[test]
fn input_table_survives_the_whole_pipeline_unchanged() {
    let table = fixture();
    let before = table.clone();
    let _ = TablePrinter::new()
        .squish_column("squished")
        .angel_column("saved")
        .fit_width(&table, 100)
        .unwrap();
    assert_eq!(table, before);
}

#[test]
fn rendered_rows_never_exceed_the_screen_width() {
    let printer = TablePrinter::new()
        .squish_column("squished")
        .angel_column("saved")
        .config(PrintConfig::new().banner("fit report"));
    let fit = printer.fit_width(&fixture(), 100).unwrap();

    let mut grid = PlainGrid::new(Vec::new());
    printer.write_fit(&fit, &mut grid).unwrap();
    let output = String::from_utf8(grid.into_inner()).unwrap();

    // 4 columns + 3 two-space gaps on top of the 100-character budget.
    let max_line = fit.screen_width + 3 * 2;
    for line in output.lines() {
        assert!(line.chars().count() <= max_line, "overlong line: {line:?}");
    }
}
