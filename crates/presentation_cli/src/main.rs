//! Weather lookup CLI
//!
//! Interactive prompt (default) or one-shot lookup of current weather.

#![allow(clippy::print_stdout)]

mod repl;
mod view;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use application::{SearchController, SearchControllerConfig};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, SystemClock, WeatherAdapter, init_logging};
use tokio::io::BufReader;
use tracing::info;

/// Weather lookup CLI
#[derive(Parser)]
#[command(name = "weather-lookup")]
#[command(author, version, about = "Look up current weather by location name", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "WEATHER_LOOKUP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one location, print the result and exit
    ///
    /// Exits with a non-zero status if the lookup failed.
    /// Example: weather-lookup lookup new york
    Lookup {
        /// Location name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
    },

    /// Start the interactive prompt (the default)
    Interactive,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn build_controller(config: &AppConfig) -> anyhow::Result<SearchController> {
    let client_config = config
        .weather
        .to_client_config()
        .context("Weather provider is not configured")?;
    let adapter = WeatherAdapter::with_config(client_config)?;

    Ok(SearchController::with_config(
        Arc::new(adapter),
        Arc::new(SystemClock),
        SearchControllerConfig::from(&config.search),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // -v overrides the configured filter; RUST_LOG still wins over both
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.filter = filter.to_string();
    }
    init_logging(&config.logging)?;

    let controller = build_controller(&config)?;
    info!(base_url = %config.weather.base_url, "Weather lookup ready");

    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Lookup { location } => {
            let loaded = repl::lookup_once(&controller, &location.join(" "), &mut stdout).await?;
            if !loaded {
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            repl::run(&controller, stdin, &mut stdout).await?;
        },
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn build_controller_requires_api_key() {
        let err = build_controller(&AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn defaults_to_interactive() {
        let cli = Cli::try_parse_from(["weather-lookup"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn lookup_joins_words() {
        let cli = Cli::try_parse_from(["weather-lookup", "-vv", "lookup", "new", "york"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Lookup { location }) => assert_eq!(location.join(" "), "new york"),
            _ => unreachable!("expected lookup"),
        }
    }
}
