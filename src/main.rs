// Main entry point - Dependency injection and terminal UI setup
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use solar_dashboard::application::dashboard_service::DashboardService;
use solar_dashboard::application::range_selector::RangeSelector;
use solar_dashboard::domain::range::RangeDescriptor;
use solar_dashboard::infrastructure::clock::LocalClock;
use solar_dashboard::infrastructure::config::load_dashboard_config;
use solar_dashboard::infrastructure::http_source::HttpTelemetrySource;
use solar_dashboard::infrastructure::logging::init_tracing;
use solar_dashboard::presentation::surface::TerminalSurface;

/// Terminal dashboard for solar-panel telemetry.
#[derive(Debug, Parser)]
#[command(name = "solar-dashboard", version, about)]
struct Cli {
    /// Telemetry endpoint, overrides the configured one.
    #[arg(long)]
    endpoint: Option<String>,

    /// Initial range: `day`, `7`, `30` or a date as YYYYMMDD.
    #[arg(long, default_value = "day")]
    range: String,

    /// Configuration file, defaults to config/dashboard.*
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = load_dashboard_config(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    init_tracing(&config.log_filter, &config.log_file)?;

    let initial: RangeDescriptor = cli.range.parse().context("Invalid --range")?;

    // Create source (infrastructure layer)
    let source = Arc::new(HttpTelemetrySource::new(
        config.endpoint.clone(),
        config.request_timeout(),
    )?);

    // Create selector and service (application layer)
    let mut selector = RangeSelector::new(Arc::new(LocalClock));
    selector.apply(initial).context("Invalid --range")?;
    let service = DashboardService::new(source, selector, TerminalSurface::default());

    tracing::info!(
        "Starting solar-dashboard against {} (range {})",
        config.endpoint,
        initial.as_query()
    );

    solar_dashboard::presentation::app::run(service, config.poll_interval()).await
}
