//! League Dashboard
//!
//! Loads a league snapshot, computes power rankings and the derived
//! analytics, and writes the dashboard report as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use dashboard_service::service::write_report;
use dashboard_service::{
    initialize_logging, initialize_logging_with_config, load_configuration, ConfigOverrides, DashboardService,
};

/// Fantasy league power rankings and dashboard report
#[derive(Parser)]
#[command(
    name = "league-dashboard",
    version,
    about = "Builds a fantasy league dashboard report with all-play power rankings"
)]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (TOML format)")]
    config: Option<PathBuf>,

    /// Snapshot directory override
    #[arg(short, long, value_name = "DIR", help = "League snapshot directory")]
    snapshot: Option<PathBuf>,

    /// Report output override
    #[arg(short, long, value_name = "FILE", help = "Write the report here instead of stdout")]
    output: Option<PathBuf>,

    /// Week override
    #[arg(short, long, value_name = "N", help = "Report on this week instead of the latest scored week")]
    week: Option<u32>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    #[arg(long, help = "Write compact JSON instead of pretty-printed")]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    // RUST_LOG filter directives win unless --log-level was given
    let use_env_filter = args.log_level.is_none() && std::env::var_os("RUST_LOG").is_some();

    let overrides = ConfigOverrides {
        snapshot_dir: args.snapshot,
        output: args.output,
        log_level: args.log_level,
        compact: args.compact,
    };
    let config = load_configuration(args.config.as_deref(), &overrides)?;

    if use_env_filter {
        initialize_logging()?;
    } else {
        initialize_logging_with_config(&config.logging.level, &config.logging.format)?;
    }
    info!(
        "Starting League Dashboard v{} (power-rankings v{})",
        env!("CARGO_PKG_VERSION"),
        power_rankings::VERSION
    );
    info!("Reading league snapshot from {:?}", config.source.snapshot_dir);

    let output = config.output.clone();
    let service = DashboardService::new(config).context("Failed to create dashboard service")?;
    let report = service.build_report(args.week).await.context("Failed to build report")?;
    info!(
        "Report ready: {} teams ranked through week {}",
        report.rankings.len(),
        report.current_week
    );

    write_report(&report, output.path.as_deref(), output.pretty).await?;

    Ok(())
}
