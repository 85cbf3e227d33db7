//! routecheck - router conformance checker
//!
//! Runs the probe battery against the configured router, prints the report
//! to stdout and exits non-zero when any probe fails.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};

use routecheck::{report, Config, Orchestrator, ReportFormat, RunSummary, TierRegistry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routecheck=info".into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match setup() {
        Ok((orchestrator, format)) => {
            let summary = RunSummary::from_results(orchestrator.run().await);
            print_report(&summary, format);
            info!(
                passed = summary.passed,
                failed = summary.failed,
                total = summary.total,
                "Router checks finished"
            );
            Ok(summary)
        }
        Err(e) => {
            let message = format!("{:#}", e);
            error!(error = %message, "Configuration error, no checks were run");
            eprintln!("Configuration error: {}", message);
            Err(e)
        }
    };

    ExitCode::from(report::exit_code(&outcome))
}

fn print_report(summary: &RunSummary, format: ReportFormat) {
    match format {
        ReportFormat::Text => print!("{}", summary.render_text()),
        ReportFormat::Json => match summary.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!(error = %e, "Failed to serialize report");
                print!("{}", summary.render_text());
            }
        },
    }
}

/// Resolve configuration and build the orchestrator
fn setup() -> Result<(Orchestrator, ReportFormat)> {
    let config = Config::from_env()?;
    info!(base_url = %config.base_url, "Configuration loaded successfully");

    let registry = TierRegistry::load(config.tiers_file.as_deref())
        .context("Failed to load tier registry")?;

    let orchestrator =
        Orchestrator::new(&config, registry).context("Invalid router check configuration")?;

    Ok((orchestrator, config.report_format))
}
