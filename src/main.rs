use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use lambda_report::clients::{CloudWatchMetrics, LambdaRegistry};
use lambda_report::core::config::AppConfig;
use lambda_report::errors::ReportError;
use lambda_report::report::generate_report;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "lambda-report", version)]
#[command(about = "Report Lambda functions with their last invocation and total invocations")]
struct Cli {
    /// Regions to scan, reported in the order given.
    #[arg(value_name = "REGION")]
    regions: Vec<String>,

    /// Metric queries allowed in flight per region. 1 keeps the run sequential.
    #[arg(long, env = "LAMBDA_REPORT_CONCURRENCY", default_value_t = 1)]
    concurrency: usize,

    /// Log at DEBUG instead of INFO.
    #[arg(long, env = "LAMBDA_REPORT_DEBUG")]
    debug: bool,
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let shared = aws_config::from_env().load().await;
    let registry = LambdaRegistry::new(shared.clone());
    let metrics = CloudWatchMetrics::new(shared);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_report(&config, &registry, &metrics, &mut out)
        .await
        .context("report output failed")?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    lambda_report::setup_logging(cli.debug);

    let config = match AppConfig::new(cli.regions, cli.concurrency, chrono::Utc::now()) {
        Ok(config) => config,
        Err(ReportError::Usage(msg)) => {
            let usage = Cli::command().render_usage();
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{usage}");
            let _ = writeln!(stderr, "error: {msg}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
