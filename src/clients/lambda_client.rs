use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::config::Region;
use aws_sdk_lambda::error::DisplayErrorContext;
use tracing::{debug, info};

use super::FunctionRegistry;
use crate::core::models::FunctionSummary;
use crate::errors::ReportError;

/// Function registry backed by the Lambda `ListFunctions` API.
pub struct LambdaRegistry {
    shared: SdkConfig,
    clients: Mutex<HashMap<String, LambdaClient>>,
}

impl LambdaRegistry {
    #[must_use]
    pub fn new(shared: SdkConfig) -> Self {
        Self {
            shared,
            clients: Mutex::new(HashMap::new()),
        }
    }

    fn client_for(&self, region: &str) -> LambdaClient {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        clients
            .entry(region.to_string())
            .or_insert_with(|| {
                let config = aws_sdk_lambda::config::Builder::from(&self.shared)
                    .region(Region::new(region.to_string()))
                    .build();
                LambdaClient::from_conf(config)
            })
            .clone()
    }
}

#[async_trait]
impl FunctionRegistry for LambdaRegistry {
    async fn list_functions(&self, region: &str) -> Result<Vec<FunctionSummary>, ReportError> {
        let client = self.client_for(region);

        // A single ListFunctions call; `next_marker` is intentionally not followed.
        let resp = client
            .list_functions()
            .send()
            .await
            .map_err(|e| ReportError::registry(region, DisplayErrorContext(&e).to_string()))?;

        if resp.next_marker().is_some() {
            debug!(region, "ListFunctions returned more pages; only the first is reported");
        }

        let functions: Vec<FunctionSummary> = resp
            .functions()
            .iter()
            .filter_map(|f| {
                let name = f.function_name()?;
                Some(FunctionSummary::new(name, f.last_modified().unwrap_or_default()))
            })
            .collect();

        info!(region, count = functions.len(), "Listed Lambda functions");
        Ok(functions)
    }
}
