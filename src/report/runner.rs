use std::io::Write;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::fetcher::fetch_invocation_stats;
use super::lister::list_region_functions;
use super::render::{write_assumptions, write_rows};
use crate::clients::{FunctionRegistry, MetricsSource};
use crate::core::config::{AppConfig, StatisticWindow};
use crate::core::models::{InvocationStats, ReportRow};
use crate::errors::ReportError;

/// Drives the lister and fetcher over every region and assembles rows.
///
/// Rows keep registry order within a region and region order across the
/// run; ordinals start at 1 and have no gaps. With `concurrency > 1` the
/// metric queries of a region overlap, but results are reassembled in
/// registry order before any row is numbered.
pub struct ReportRunner<'a, R: ?Sized, M: ?Sized> {
    registry: &'a R,
    metrics: &'a M,
    window: StatisticWindow,
    concurrency: usize,
}

impl<'a, R, M> ReportRunner<'a, R, M>
where
    R: FunctionRegistry + ?Sized,
    M: MetricsSource + ?Sized,
{
    pub fn new(registry: &'a R, metrics: &'a M, window: StatisticWindow) -> Self {
        Self {
            registry,
            metrics,
            window,
            concurrency: 1,
        }
    }

    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// # Errors
    ///
    /// Collaborator failures are recovered inline; only a failed write to
    /// `out` is returned.
    pub async fn collect_rows<W: Write>(
        &self,
        regions: &[String],
        out: &mut W,
    ) -> Result<Vec<ReportRow>, ReportError> {
        let mut rows = Vec::new();

        for region in regions {
            writeln!(out, "Fetching Lambda functions in {region}...")?;
            let functions = list_region_functions(self.registry, region, out).await?;

            let results: Vec<Result<InvocationStats, ReportError>> = stream::iter(&functions)
                .map(|function| {
                    fetch_invocation_stats(self.metrics, region, &function.name, &self.window)
                })
                .buffered(self.concurrency)
                .collect()
                .await;

            for (function, result) in functions.into_iter().zip(results) {
                let stats = match result {
                    Ok(stats) => stats,
                    Err(e) => {
                        warn!(
                            region = %region,
                            function_name = %function.name,
                            error = %e,
                            "Metric query failed"
                        );
                        writeln!(
                            out,
                            "Error fetching CloudWatch metrics for {}: {}",
                            function.name,
                            e.detail()
                        )?;
                        InvocationStats::unavailable()
                    }
                };

                rows.push(ReportRow {
                    ordinal: rows.len() + 1,
                    function_name: function.name,
                    creation_date: function.last_modified,
                    last_invoked: stats.last_invoked,
                    invocations: stats.invocations,
                    region: region.clone(),
                });
            }
        }

        Ok(rows)
    }
}

/// Runs the whole report for `config` and writes it to `out`.
///
/// The assumptions banner is always written, even when no rows were
/// produced.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn generate_report<R, M, W>(
    config: &AppConfig,
    registry: &R,
    metrics: &M,
    out: &mut W,
) -> Result<Vec<ReportRow>, ReportError>
where
    R: FunctionRegistry + ?Sized,
    M: MetricsSource + ?Sized,
    W: Write,
{
    let rows = ReportRunner::new(registry, metrics, config.window)
        .with_concurrency(config.concurrency)
        .collect_rows(&config.regions, out)
        .await?;

    write_assumptions(out, &config.regions, &config.window)?;
    write_rows(out, &rows)?;
    out.flush()?;

    info!(
        regions = config.regions.len(),
        rows = rows.len(),
        "Report complete"
    );
    Ok(rows)
}
