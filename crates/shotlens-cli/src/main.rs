mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shotlens_core::config::ViewerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shotlens", about = "Screenshot color picking and range classification")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewer config file (TOML) supplying default mode and tolerance
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show screenshot dimensions
    Info(commands::info::InfoArgs),
    /// Sample one pixel and print copyable values
    Pick(commands::pick::PickArgs),
    /// Derive lower/upper bounds around a color
    Range(commands::range::RangeArgs),
    /// Count pixels inside a color range and write the match overlay
    Classify(commands::classify::ClassifyArgs),
    /// Convert an RGB color to HSV and gray
    Convert(commands::convert::ConvertArgs),
    /// Cut a region out of a screenshot and save it as a template image
    Crop(commands::crop::CropArgs),
    /// Print or save the default viewer config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match cli.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Pick(args) => commands::pick::run(args, &config),
        Commands::Range(args) => commands::range::run(args, &config),
        Commands::Classify(args) => commands::classify::run(args, &config),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
