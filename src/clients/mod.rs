//! Collaborator seams for the report pipeline.
//!
//! The orchestrator only talks to these traits; the AWS SDK backed
//! implementations live in the submodules and test code supplies stubs.

use async_trait::async_trait;

use crate::core::config::StatisticWindow;
use crate::core::models::{Datapoint, FunctionSummary};
use crate::errors::ReportError;

pub mod cloudwatch_client;
pub mod lambda_client;

pub use cloudwatch_client::CloudWatchMetrics;
pub use lambda_client::LambdaRegistry;

/// Lists the functions deployed in a region.
#[async_trait]
pub trait FunctionRegistry: Send + Sync {
    /// Returns functions in registry order. Only the first page is read.
    async fn list_functions(&self, region: &str) -> Result<Vec<FunctionSummary>, ReportError>;
}

/// Reads daily invocation sums for one function.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn invocation_datapoints(
        &self,
        region: &str,
        function_name: &str,
        window: &StatisticWindow,
    ) -> Result<Vec<Datapoint>, ReportError>;
}
