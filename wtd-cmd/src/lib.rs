//! Command implementations for the weather trends CLI.
//!
//! Each subcommand performs one request against the backend and prints the
//! result to stdout.

use clap::Subcommand;
use log::info;
use std::io::Write;
use wtd_core::client::SummaryClient;
use wtd_core::config::ClientConfig;

pub mod summary;
pub mod trend;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the yearly summary and print the twelve monthly averages
    Summary {
        /// Write CSV (month,avg_temperature,avg_humidity) instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Fetch daily aggregates for one month of the summary year
    Trend {
        /// Month number (1-12)
        #[arg(short, long)]
        month: u32,
    },

    /// Check that the backend is up
    Health,
}

/// One decimal place, or `-` for a missing value.
pub(crate) fn format_value(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}

pub async fn run(command: Command, config: ClientConfig) -> anyhow::Result<()> {
    let client = SummaryClient::new(config)?;
    info!(
        "Using backend at {} (timeout {:?})",
        client.config().base_url,
        client.config().timeout
    );
    let mut out = std::io::stdout();
    match command {
        Command::Summary { csv } => summary::run_summary(&client, csv, &mut out).await,
        Command::Trend { month } => trend::run_trend(&client, month, &mut out).await,
        Command::Health => {
            let health = client.health().await?;
            writeln!(out, "{}", health.status)?;
            if !health.is_ok() {
                anyhow::bail!("Backend reported status {:?}", health.status);
            }
            Ok(())
        }
    }
}
