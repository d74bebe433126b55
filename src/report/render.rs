use std::io::{self, Write};

use crate::core::config::{
    METRIC_NAME, METRIC_NAMESPACE, PERIOD_SECONDS, StatisticWindow, format_timestamp,
};
use crate::core::models::ReportRow;

use super::table::render_grid;

pub const REPORT_HEADERS: [&str; 6] = [
    "#",
    "Function Name",
    "Creation Date",
    "Last Executed",
    "Invocations",
    "Region",
];

pub const REPORT_TITLE: &str = "Lambda Function Report";
pub const NO_FUNCTIONS_FOUND: &str = "No Lambda functions found.";

/// Writes the fixed query parameters so readers know what the numbers mean.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_assumptions<W: Write>(
    out: &mut W,
    regions: &[String],
    window: &StatisticWindow,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Assumptions for CloudWatch Metrics:")?;
    writeln!(out, "- Namespace: {METRIC_NAMESPACE}")?;
    writeln!(out, "- Region(s): {}", regions.join(", "))?;
    writeln!(out, "- Metric Name: {METRIC_NAME}")?;
    writeln!(out, "- Period: {PERIOD_SECONDS} seconds (1 day)")?;
    writeln!(out, "- Start Time: {}", format_timestamp(&window.start))?;
    writeln!(out, "- End Time: {}", format_timestamp(&window.end))?;
    writeln!(out)
}

/// Writes the grid table, or the "none found" line when `rows` is empty.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_rows<W: Write>(out: &mut W, rows: &[ReportRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{NO_FUNCTIONS_FOUND}");
    }

    let cells: Vec<Vec<String>> = rows.iter().map(ReportRow::cells).collect();
    writeln!(out)?;
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "{}", render_grid(&REPORT_HEADERS, &cells))
}
