//! Weather trends CLI - Command line tool for querying the weather backend.

use clap::Parser;
use std::time::Duration;
use wtd_core::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(
    name = "wtd-cli",
    version,
    about = "Weather trends dashboard companion CLI"
)]
struct Cli {
    /// Backend base URL (scheme, host and port)
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: wtd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ClientConfig::new(cli.base_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    wtd_cmd::run(cli.command, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wtd-cli", "summary"]).unwrap();
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(matches!(cli.command, wtd_cmd::Command::Summary { csv: false }));
    }

    #[test]
    fn test_trend_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wtd-cli",
            "trend",
            "--month",
            "7",
            "--base-url",
            "http://weather.local:9000",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://weather.local:9000");
        assert!(matches!(cli.command, wtd_cmd::Command::Trend { month: 7 }));
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
