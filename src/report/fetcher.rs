use tracing::debug;

use crate::clients::MetricsSource;
use crate::core::config::StatisticWindow;
use crate::core::models::InvocationStats;
use crate::errors::ReportError;

/// Fetches and aggregates the invocation statistics of one function.
///
/// A single attempt is made; callers map a failure to
/// [`InvocationStats::unavailable`].
///
/// # Errors
///
/// Returns `ReportError::Metrics` if the statistics query fails.
pub async fn fetch_invocation_stats<M>(
    metrics: &M,
    region: &str,
    function_name: &str,
    window: &StatisticWindow,
) -> Result<InvocationStats, ReportError>
where
    M: MetricsSource + ?Sized,
{
    let datapoints = metrics
        .invocation_datapoints(region, function_name, window)
        .await?;
    let stats = InvocationStats::from_datapoints(&datapoints);
    debug!(
        region,
        function_name,
        last_invoked = %stats.last_invoked,
        invocations = %stats.invocations,
        "Aggregated datapoints"
    );
    Ok(stats)
}
