use std::fmt;

use chrono::{DateTime, Utc};

use super::config::format_timestamp;

/// Rendered in place of a value the metrics API could not provide.
pub const UNAVAILABLE: &str = "Error";
pub const NEVER_EXECUTED: &str = "Never Executed";

/// One function as returned by the registry listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSummary {
    pub name: String,
    /// Last-modified timestamp, passed through verbatim.
    pub last_modified: String,
}

impl FunctionSummary {
    pub fn new(name: impl Into<String>, last_modified: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_modified: last_modified.into(),
        }
    }
}

/// A single per-period metric observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datapoint {
    pub timestamp: DateTime<Utc>,
    pub sum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastInvoked {
    At(DateTime<Utc>),
    Never,
    Unavailable,
}

impl fmt::Display for LastInvoked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastInvoked::At(ts) => f.write_str(&format_timestamp(ts)),
            LastInvoked::Never => f.write_str(NEVER_EXECUTED),
            LastInvoked::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationCount {
    Counted(u64),
    Unavailable,
}

impl fmt::Display for InvocationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationCount::Counted(n) => write!(f, "{n}"),
            InvocationCount::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationStats {
    pub last_invoked: LastInvoked,
    pub invocations: InvocationCount,
}

impl InvocationStats {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            last_invoked: LastInvoked::Unavailable,
            invocations: InvocationCount::Unavailable,
        }
    }

    /// Reduces datapoints to the latest timestamp and the truncated total.
    #[must_use]
    pub fn from_datapoints(datapoints: &[Datapoint]) -> Self {
        let Some(latest) = datapoints.iter().map(|dp| dp.timestamp).max() else {
            return Self {
                last_invoked: LastInvoked::Never,
                invocations: InvocationCount::Counted(0),
            };
        };
        let total: f64 = datapoints.iter().map(|dp| dp.sum).sum();
        // Truncates toward zero; negative or NaN sums saturate to 0.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total = total as u64;

        Self {
            last_invoked: LastInvoked::At(latest),
            invocations: InvocationCount::Counted(total),
        }
    }
}

/// One line of the final table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub ordinal: usize,
    pub function_name: String,
    pub creation_date: String,
    pub last_invoked: LastInvoked,
    pub invocations: InvocationCount,
    pub region: String,
}

impl ReportRow {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.ordinal.to_string(),
            self.function_name.clone(),
            self.creation_date.clone(),
            self.last_invoked.to_string(),
            self.invocations.to_string(),
            self.region.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32, sum: f64) -> Datapoint {
        Datapoint {
            timestamp: Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap(),
            sum,
        }
    }

    #[test]
    fn no_datapoints_means_never_executed() {
        let stats = InvocationStats::from_datapoints(&[]);
        assert_eq!(stats.last_invoked.to_string(), "Never Executed");
        assert_eq!(stats.invocations, InvocationCount::Counted(0));
    }

    #[test]
    fn latest_timestamp_and_total_sum() {
        let stats = InvocationStats::from_datapoints(&[day(3, 7.0), day(1, 5.0)]);
        assert_eq!(stats.last_invoked.to_string(), "2024-01-03 00:00:00 UTC");
        assert_eq!(stats.invocations.to_string(), "12");
    }

    #[test]
    fn fractional_total_is_truncated() {
        let stats = InvocationStats::from_datapoints(&[day(1, 1.5), day(2, 2.9)]);
        assert_eq!(stats.invocations, InvocationCount::Counted(4));
    }

    #[test]
    fn unavailable_renders_error_sentinels() {
        let stats = InvocationStats::unavailable();
        assert_eq!(stats.last_invoked.to_string(), "Error");
        assert_eq!(stats.invocations.to_string(), "Error");
    }
}
