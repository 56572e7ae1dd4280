use blood_match::config::Settings;
use blood_match::core::{forecast_demand, Ranker};
use blood_match::error::Result;
use blood_match::models::{
    ForecastDemandRequest, ForecastDemandResponse, RankDonorsRequest, RankDonorsResponse,
};
use blood_match::services::load_request;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank blood donors for a request or forecast blood type demand
#[derive(Debug, Parser)]
#[command(name = "blood-match", version, about)]
struct Cli {
    /// Configuration file (defaults to config/default.toml + config/local.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank donors for a blood request read from a JSON file
    Rank {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Forecast per-type demand from a JSON usage history file
    Forecast {
        #[arg(short, long)]
        input: PathBuf,
        /// Trailing window size, overrides the file and configuration
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=365))]
        window: Option<u64>,
    },
}

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the JSON result, logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match log_format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Rank { input } => {
            let req: RankDonorsRequest = load_request(&input)?;
            let ranker = Ranker::new(req.ranking_options(&settings.ranking_options()));

            info!(
                request_id = %req.request.id,
                donors = req.donors.len(),
                "Ranking donors"
            );

            let ranked = ranker.rank(&req.donors, &req.request);
            print_json(&RankDonorsResponse::new(&req.request, ranked))
        }
        Command::Forecast { input, window } => {
            let req: ForecastDemandRequest = load_request(&input)?;
            let window = window
                .map(|w| w as usize)
                .or(req.window)
                .unwrap_or(settings.forecast.window);

            info!(observations = req.history.len(), window, "Forecasting demand");

            print_json(&ForecastDemandResponse {
                forecasts: forecast_demand(&req.history, window),
                window,
                generated_at: chrono::Utc::now(),
            })
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);
    info!(?settings, "Configuration loaded");

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
