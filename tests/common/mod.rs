#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lambda_report::clients::{FunctionRegistry, MetricsSource};
use lambda_report::core::config::{AppConfig, StatisticWindow};
use lambda_report::core::models::{Datapoint, FunctionSummary};
use lambda_report::errors::ReportError;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub fn config(regions: &[&str]) -> AppConfig {
    AppConfig::new(regions.iter().map(ToString::to_string).collect(), 1, fixed_now()).unwrap()
}

pub fn day(year: i32, month: u32, d: u32, sum: f64) -> Datapoint {
    Datapoint {
        timestamp: Utc.with_ymd_and_hms(year, month, d, 0, 0, 0).unwrap(),
        sum,
    }
}

/// Registry stub keyed by region. Unknown regions list no functions.
#[derive(Default)]
pub struct StubRegistry {
    regions: HashMap<String, Result<Vec<FunctionSummary>, String>>,
}

impl StubRegistry {
    pub fn with_functions(mut self, region: &str, names: &[&str]) -> Self {
        let functions = names
            .iter()
            .map(|name| FunctionSummary::new(*name, "2024-02-29T14:00:00.000+0000"))
            .collect();
        self.regions.insert(region.to_string(), Ok(functions));
        self
    }

    pub fn failing(mut self, region: &str, message: &str) -> Self {
        self.regions
            .insert(region.to_string(), Err(message.to_string()));
        self
    }
}

#[async_trait]
impl FunctionRegistry for StubRegistry {
    async fn list_functions(&self, region: &str) -> Result<Vec<FunctionSummary>, ReportError> {
        match self.regions.get(region) {
            Some(Ok(functions)) => Ok(functions.clone()),
            Some(Err(message)) => Err(ReportError::registry(region, message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

/// Metrics stub keyed by function name. Unknown functions have no datapoints.
#[derive(Default)]
pub struct StubMetrics {
    functions: HashMap<String, Result<Vec<Datapoint>, String>>,
    /// Extra scheduler yields before answering, to reorder completions.
    delays: HashMap<String, usize>,
    pub calls: Mutex<Vec<(String, String, StatisticWindow)>>,
    pub completed: Mutex<Vec<String>>,
}

impl StubMetrics {
    pub fn with_datapoints(mut self, function_name: &str, datapoints: Vec<Datapoint>) -> Self {
        self.functions
            .insert(function_name.to_string(), Ok(datapoints));
        self
    }

    pub fn failing(mut self, function_name: &str, message: &str) -> Self {
        self.functions
            .insert(function_name.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_delay(mut self, function_name: &str, yields: usize) -> Self {
        self.delays.insert(function_name.to_string(), yields);
        self
    }
}

#[async_trait]
impl MetricsSource for StubMetrics {
    async fn invocation_datapoints(
        &self,
        region: &str,
        function_name: &str,
        window: &StatisticWindow,
    ) -> Result<Vec<Datapoint>, ReportError> {
        self.calls
            .lock()
            .unwrap()
            .push((region.to_string(), function_name.to_string(), *window));

        for _ in 0..self.delays.get(function_name).copied().unwrap_or(0) {
            tokio::task::yield_now().await;
        }
        self.completed
            .lock()
            .unwrap()
            .push(function_name.to_string());

        match self.functions.get(function_name) {
            Some(Ok(datapoints)) => Ok(datapoints.clone()),
            Some(Err(message)) => Err(ReportError::metrics(function_name, message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
