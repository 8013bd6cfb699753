use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shotlens_core::io::image_io::load_raster;

#[derive(Args)]
pub struct InfoArgs {
    /// Screenshot file (PNG/JPEG, or .b64/.txt with base64 text)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (width, height) = raster.dimensions();
    let size = std::fs::metadata(&args.file)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", width, height);
    println!("Pixels:      {}", width as u64 * height as u64);
    println!("File size:   {:.1} KB", size as f64 / 1024.0);

    Ok(())
}
