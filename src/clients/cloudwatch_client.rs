use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudwatch::Client as CloudWatchClient;
use aws_sdk_cloudwatch::config::Region;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudwatch::types::{Dimension, Statistic};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::MetricsSource;
use crate::core::config::{
    FUNCTION_NAME_DIMENSION, METRIC_NAME, METRIC_NAMESPACE, PERIOD_SECONDS, StatisticWindow,
};
use crate::core::models::Datapoint;
use crate::errors::ReportError;

/// Metrics source backed by CloudWatch `GetMetricStatistics`.
pub struct CloudWatchMetrics {
    shared: SdkConfig,
    clients: Mutex<HashMap<String, CloudWatchClient>>,
}

impl CloudWatchMetrics {
    #[must_use]
    pub fn new(shared: SdkConfig) -> Self {
        Self {
            shared,
            clients: Mutex::new(HashMap::new()),
        }
    }

    fn client_for(&self, region: &str) -> CloudWatchClient {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        clients
            .entry(region.to_string())
            .or_insert_with(|| {
                let config = aws_sdk_cloudwatch::config::Builder::from(&self.shared)
                    .region(Region::new(region.to_string()))
                    .build();
                CloudWatchClient::from_conf(config)
            })
            .clone()
    }
}

fn to_aws(ts: &DateTime<Utc>) -> AwsDateTime {
    AwsDateTime::from_millis(ts.timestamp_millis())
}

fn from_aws(ts: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}

#[async_trait]
impl MetricsSource for CloudWatchMetrics {
    async fn invocation_datapoints(
        &self,
        region: &str,
        function_name: &str,
        window: &StatisticWindow,
    ) -> Result<Vec<Datapoint>, ReportError> {
        let client = self.client_for(region);

        let resp = client
            .get_metric_statistics()
            .namespace(METRIC_NAMESPACE)
            .metric_name(METRIC_NAME)
            .dimensions(
                Dimension::builder()
                    .name(FUNCTION_NAME_DIMENSION)
                    .value(function_name)
                    .build(),
            )
            .start_time(to_aws(&window.start))
            .end_time(to_aws(&window.end))
            .period(PERIOD_SECONDS)
            .statistics(Statistic::Sum)
            .send()
            .await
            .map_err(|e| {
                ReportError::metrics(function_name, DisplayErrorContext(&e).to_string())
            })?;

        let datapoints: Vec<Datapoint> = resp
            .datapoints()
            .iter()
            .filter_map(|dp| {
                let timestamp = dp.timestamp().and_then(from_aws)?;
                Some(Datapoint {
                    timestamp,
                    sum: dp.sum().unwrap_or_default(),
                })
            })
            .collect();

        debug!(
            region,
            function_name,
            datapoints = datapoints.len(),
            "Fetched invocation statistics"
        );
        Ok(datapoints)
    }
}
