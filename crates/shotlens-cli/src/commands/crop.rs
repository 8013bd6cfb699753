use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shotlens_core::io::crop::{crop_roi, template_file_name};
use shotlens_core::io::image_io::{load_raster, save_rgb};

use super::parse_roi;
use crate::summary::print_crop_summary;

#[derive(Args)]
pub struct CropArgs {
    /// Screenshot file
    pub file: PathBuf,

    /// Region as "x,y,width,height"
    #[arg(long)]
    pub roi: String,

    /// Output image (default: template_<unix millis>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let roi = parse_roi(&args.roi).context("Invalid --roi")?;

    let template = crop_roi(&raster, roi)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(template_file_name()));
    save_rgb(&template, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_crop_summary(&args.file, roi, &output);
    Ok(())
}
