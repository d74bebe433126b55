//! Lambda Report - audits deployed Lambda functions and their invocation history.
//!
//! For each requested region the crate lists the deployed functions, asks
//! CloudWatch for their daily `Invocations` sums over the last 1440 days, and
//! renders one grid table with the last invocation time and total count of
//! every function.
//!
//! # Architecture
//!
//! The pipeline is sequential by default:
//! - [`clients`] defines the `FunctionRegistry` and `MetricsSource` seams and
//!   their AWS SDK implementations
//! - [`report`] holds the lister, the fetcher, the orchestrating runner and
//!   the table rendering
//! - [`core`] carries the fixed metric parameters and the row model
//!
//! Collaborator failures never abort a run: a failed listing drops the region
//! from the table, a failed metric query shows `Error` in its row.
//!
//! # Example
//!
//! ```no_run
//! use lambda_report::clients::{CloudWatchMetrics, LambdaRegistry};
//! use lambda_report::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     lambda_report::setup_logging(false);
//!
//!     let config = AppConfig::new(vec!["us-east-1".to_string()], 1, chrono::Utc::now())?;
//!     let shared = aws_config::from_env().load().await;
//!     let registry = LambdaRegistry::new(shared.clone());
//!     let metrics = CloudWatchMetrics::new(shared);
//!
//!     let mut stdout = std::io::stdout();
//!     let rows = lambda_report::report::generate_report(&config, &registry, &metrics, &mut stdout).await?;
//!     println!("{} functions reported", rows.len());
//!     Ok(())
//! }
//! ```
pub mod clients;
pub mod core;
pub mod errors;
pub mod report;

pub use errors::ReportError;

/// Configure diagnostic logging on stderr.
///
/// Stdout is reserved for the report itself. `debug` raises the level from
/// INFO to DEBUG. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// lambda_report::setup_logging(false);
/// ```
pub fn setup_logging(debug: bool) {
    use std::io::IsTerminal;

    let _ = tracing_subscriber::fmt()
        .with_max_level(if debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .try_init();
}
