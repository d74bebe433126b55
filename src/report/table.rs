//! Grid table rendering.
//!
//! Produces the bordered layout operators are used to reading from the
//! original report: `+---+` rules, `=` under the header and a rule after
//! every row. Integer-only columns are right-aligned, everything else is
//! left-aligned.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table, TableComponent};

fn is_integer(cell: &str) -> bool {
    cell.parse::<i64>().is_ok()
}

fn is_numeric_column(rows: &[Vec<String>], col: usize) -> bool {
    !rows.is_empty()
        && rows
            .iter()
            .all(|row| row.get(col).is_some_and(|cell| is_integer(cell)))
}

/// Renders `headers` and `rows` as a grid table, without a trailing newline.
#[must_use]
pub fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    // ASCII_FULL joins the header rule with '=' and row rules with '|'.
    table.set_style(TableComponent::MiddleHeaderIntersections, '+');
    table.set_style(TableComponent::LeftBorderIntersections, '+');
    table.set_style(TableComponent::RightBorderIntersections, '+');
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(headers.to_vec());

    for row in rows {
        table.add_row(row.clone());
    }

    for col in 0..headers.len() {
        if is_numeric_column(rows, col) {
            if let Some(column) = table.column_mut(col) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}
