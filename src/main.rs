//! fxtrader - one-shot OANDA pricing and market order client
//!
//! Fetches best bid/ask for a handful of currency pairs and, if the first
//! pair is tradeable, buys one unit bounded at its ask.
//!
//! # Usage
//! ```sh
//! cargo run -- --credentials config.json
//! ```
//!
//! # Environment Variables
//! - `OANDA_API_BASE_URL` - REST base URL (default: practice environment)
//! - `OANDA_CREDENTIALS_PATH` - credentials JSON file (default: `config.json`)

use anyhow::Result;
use clap::Parser;
use fxtrader::application::{Driver, OrderOutcome};
use fxtrader::config::OandaConfig;
use fxtrader::infrastructure::OandaClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "OANDA pricing and market order client", long_about = None)]
struct Cli {
    /// Credentials JSON file with `accountID` and `bearerToken`
    #[arg(long)]
    credentials: Option<PathBuf>,

    /// OANDA REST base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Comma-separated instruments to price; the first one is traded
    #[arg(long, value_delimiter = ',')]
    instruments: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();

    let mut config = OandaConfig::from_env();
    if let Some(path) = cli.credentials {
        config.credentials_path = path;
    }
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }
    info!(
        "fxtrader {} using {} (credentials: {})",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url,
        config.credentials_path.display()
    );

    let client = Arc::new(OandaClient::from_config(&config)?);

    let instruments = requested_instruments(cli.instruments);
    let driver = if instruments.is_empty() {
        Driver::with_default_instruments(client.clone(), client)
    } else {
        Driver::new(client.clone(), client, instruments)
    };
    info!("Instruments: {:?}", driver.instruments());

    let report = driver.run().await?;
    match report.order {
        OrderOutcome::Placed(order) => info!("Done: order {}", order.last_transaction_id),
        OrderOutcome::NotTradeable { instrument } => info!("Done: {} not traded", instrument),
        OrderOutcome::Failed(_) => info!("Done: order not placed"),
    }

    Ok(())
}

/// Drops blank entries left by stray commas in `--instruments`.
fn requested_instruments(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
