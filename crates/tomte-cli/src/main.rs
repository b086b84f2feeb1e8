//! tomte binary.
//!
//! # Usage
//!
//! ```bash
//! # Draw assignments and email every giver
//! tomte --config party.toml
//!
//! # Validate the config and draw without sending anything
//! tomte --config party.toml --dry-run
//! ```

use std::path::PathBuf;

use clap::Parser;
use tomte_cli::{DeliveryMode, ExchangeConfig, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Secret Santa draw-and-notify tool
#[derive(Parser, Debug)]
#[command(name = "tomte")]
#[command(about = "Draw Secret Santa assignments and email each giver privately")]
#[command(version)]
struct Args {
    /// Path to the draw config (SMTP settings plus participants)
    #[arg(short, long)]
    config: PathBuf,

    /// Draw but send nothing; log who would be notified
    #[arg(long)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("tomte starting");

    let config = ExchangeConfig::load(&args.config)?;
    tracing::info!(
        "Loaded {} participants for relay {}",
        config.participants.len(),
        config.smtp.relay
    );

    let mode = if args.dry_run {
        tracing::warn!("Dry run - no notices will be sent");
        DeliveryMode::DryRun
    } else {
        DeliveryMode::Send
    };

    run(&config, mode)?;

    Ok(())
}
