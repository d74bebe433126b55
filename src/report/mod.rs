//! Report pipeline: list functions per region, fetch their invocation
//! statistics, then render the assumptions banner and the grid table.
pub mod fetcher;
pub mod lister;
pub mod render;
pub mod runner;
pub mod table;

pub use render::{REPORT_HEADERS, write_assumptions, write_rows};
pub use runner::{ReportRunner, generate_report};
