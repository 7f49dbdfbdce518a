//! Risk Dashboard TUI Entry Point

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use demo_dashboard::prelude::*;
use risk_models::portfolio::PortfolioConfig;
use tracing_subscriber::EnvFilter;

/// Risk Dashboard - interactive payoff and scenario risk charts
#[derive(Parser, Debug)]
#[command(name = "risk-dashboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Starting inputs (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE", env = "RISK_DASHBOARD_LOG")]
    log_file: Option<PathBuf>,
}

/// Logging goes to a file only; writing to stdout would corrupt the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let config = match &args.config {
        Some(path) => load_inputs(path)?,
        None => PortfolioConfig::builder().build()?,
    };
    tracing::info!(
        notional = config.notional(),
        strike = config.strike(),
        option_type = %config.option_type(),
        "Starting dashboard"
    );

    let mut app = TuiApp::new(&config)?;
    app.run().await?;

    Ok(())
}
