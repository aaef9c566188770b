mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hivemap_core::search::DEFAULT_RADIUS_KM;

#[derive(Debug, Parser)]
#[command(name = "hivemap-cli")]
#[command(about = "hivemap beekeeper directory command line interface")]
struct Cli {
    /// Path to the vendor registry file.
    #[arg(
        long,
        env = "HIVEMAP_VENDORS_PATH",
        default_value = "./config/vendors.yaml"
    )]
    vendors: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load and validate the vendor registry file.
    Validate,
    /// Rank vendors by distance from a query point.
    ///
    /// Unlike the HTTP API, the radius is not clamped to the server-side
    /// acceptance window — operators may sweep as wide as they like.
    Search {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// Search radius in kilometers.
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius: f64,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate => commands::run_validate(&cli.vendors),
        Commands::Search {
            latitude,
            longitude,
            radius,
        } => commands::run_search(&cli.vendors, latitude, longitude, radius),
    }
}
