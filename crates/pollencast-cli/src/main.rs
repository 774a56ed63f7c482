mod forecast;
mod normalize;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pollencast")]
#[command(about = "Pollen, weather and allergy risk from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and print the pollen forecast for a location
    Forecast {
        #[command(flatten)]
        target: LocationArgs,
        /// Print the normalized payload as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print today's overall pollen risk, optionally for one allergen
    Risk {
        #[command(flatten)]
        target: LocationArgs,
        /// Allergen name or code to look up (e.g. "tree", "birch")
        #[arg(long)]
        allergen: Option<String>,
    },
    /// Normalize a raw Environment API payload read from a file
    Normalize {
        /// Path to a JSON file holding a raw payload or a `{success, data}` envelope
        file: PathBuf,
        /// Reference date for day labels (defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Debug, Args)]
struct LocationArgs {
    /// Named location, e.g. "Boston, MA"
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

/// What to query the Environment API for.
#[derive(Debug, Clone, PartialEq)]
enum Target {
    Named(String),
    Coordinates { lat: f64, lon: f64 },
}

impl LocationArgs {
    /// Resolves the flags, falling back to the configured default location.
    fn resolve(&self, default_location: &str) -> Target {
        match (&self.location, self.lat, self.lon) {
            (Some(name), _, _) => Target::Named(name.clone()),
            (None, Some(lat), Some(lon)) => Target::Coordinates { lat, lon },
            _ => Target::Named(default_location.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = pollencast_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Forecast { target, json } => {
            let target = target.resolve(&config.default_location);
            forecast::run_forecast(&config, &target, json).await
        }
        Commands::Risk { target, allergen } => {
            let target = target.resolve(&config.default_location);
            forecast::run_risk(&config, &target, allergen.as_deref()).await
        }
        Commands::Normalize { file, today } => normalize::run_normalize(&file, today),
    }
}
