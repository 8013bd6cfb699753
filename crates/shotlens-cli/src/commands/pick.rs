use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shotlens_core::color::{pick_pixel_color, ColorMode};
use shotlens_core::config::ViewerConfig;
use shotlens_core::io::image_io::load_raster;

use super::ModeArg;
use crate::summary::print_pick_summary;

#[derive(Args)]
pub struct PickArgs {
    /// Screenshot file
    pub file: PathBuf,

    /// Pixel column
    #[arg(long)]
    pub x: i64,

    /// Pixel row
    #[arg(long)]
    pub y: i64,

    /// Color mode (defaults to the config's default mode)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Tolerance for the suggested range (defaults to the config's tolerance)
    #[arg(long)]
    pub tolerance: Option<u8>,
}

pub fn run(args: &PickArgs, config: &ViewerConfig) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let mode = args
        .mode
        .map(ColorMode::from)
        .unwrap_or(config.classifier.default_mode);
    let tolerance = args
        .tolerance
        .unwrap_or(config.classifier.default_tolerance);

    let picked = pick_pixel_color(&raster, args.x, args.y, mode)?;
    print_pick_summary(&picked, (args.x, args.y), tolerance);

    Ok(())
}
