use chrono::{DateTime, Duration, Utc};

use crate::errors::ReportError;

pub const METRIC_NAMESPACE: &str = "AWS/Lambda";
pub const METRIC_NAME: &str = "Invocations";
pub const FUNCTION_NAME_DIMENSION: &str = "FunctionName";
/// One datapoint per day.
pub const PERIOD_SECONDS: i32 = 86_400;
pub const LOOKBACK_DAYS: i64 = 1440;

/// Timestamp layout used for every rendered time in the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// The `[start, end]` range requested from the metrics API.
///
/// Computed once when the run starts and shared by every metric query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StatisticWindow {
    #[must_use]
    pub fn ending_at(end: DateTime<Utc>) -> Self {
        Self {
            start: end - Duration::days(LOOKBACK_DAYS),
            end,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub regions: Vec<String>,
    pub concurrency: usize,
    pub window: StatisticWindow,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ReportError::Usage` when no region was supplied.
    pub fn new(
        regions: Vec<String>,
        concurrency: usize,
        now: DateTime<Utc>,
    ) -> Result<Self, ReportError> {
        if regions.is_empty() {
            return Err(ReportError::Usage(
                "at least one region is required".to_string(),
            ));
        }

        Ok(Self {
            regions,
            concurrency: concurrency.max(1),
            window: StatisticWindow::ending_at(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_spans_lookback_days() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let window = StatisticWindow::ending_at(end);

        assert_eq!(window.end, end);
        assert_eq!((window.end - window.start).num_days(), LOOKBACK_DAYS);
        assert_eq!(format_timestamp(&window.start), "2020-06-22 12:30:00 UTC");
    }

    #[test]
    fn empty_regions_are_a_usage_error() {
        let err = AppConfig::new(Vec::new(), 1, Utc::now()).unwrap_err();
        assert!(matches!(err, ReportError::Usage(_)));
    }

    #[test]
    fn concurrency_is_at_least_one() {
        let config = AppConfig::new(vec!["us-east-1".into()], 0, Utc::now()).unwrap();
        assert_eq!(config.concurrency, 1);
    }
}
