use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use shotlens_core::color::{classify_with_progress, composite_overlay, ColorMode};
use shotlens_core::config::ViewerConfig;
use shotlens_core::io::image_io::{load_raster, save_rgb, save_rgba_png};
use tracing::debug;

use super::{parse_bound, ModeArg};
use crate::summary::print_classify_summary;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Screenshot file
    pub file: PathBuf,

    /// Lower bound, e.g. "0,0,0"
    #[arg(long)]
    pub lower: String,

    /// Upper bound, e.g. "20,20,20"
    #[arg(long)]
    pub upper: String,

    /// Color mode (defaults to the config's default mode)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write the RGBA match overlay as PNG
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Write the screenshot with the overlay blended on top
    #[arg(long)]
    pub composite: Option<PathBuf>,
}

pub fn run(args: &ClassifyArgs, config: &ViewerConfig) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let mode = args
        .mode
        .map(ColorMode::from)
        .unwrap_or(config.classifier.default_mode);
    debug!(
        width = raster.width(),
        height = raster.height(),
        %mode,
        "loaded {}",
        args.file.display()
    );
    let lower = parse_bound(&args.lower, mode).context("Invalid --lower")?;
    let upper = parse_bound(&args.upper, mode).context("Invalid --upper")?;
    if lower.is_inverted(&upper) {
        eprintln!("warning: lower bound {lower} exceeds upper bound {upper}; nothing can match");
    }

    let pb = ProgressBar::new(raster.height() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Classifying [{bar:40}] {pos}/{len} rows")?
            .progress_chars("=> "),
    );

    let result = classify_with_progress(
        &raster,
        &lower,
        &upper,
        mode,
        config.classifier.palette(),
        |rows| pb.set_position(rows as u64),
    )?;
    pb.finish_and_clear();

    if let Some(ref path) = args.overlay {
        save_rgba_png(&result.overlay, path)
            .with_context(|| format!("Failed to write overlay {}", path.display()))?;
    }
    if let Some(ref path) = args.composite {
        let blended = composite_overlay(&raster, &result.overlay)?;
        save_rgb(&blended, path)
            .with_context(|| format!("Failed to write composite {}", path.display()))?;
    }

    print_classify_summary(
        &args.file,
        mode,
        &lower,
        &upper,
        &result,
        args.overlay.as_deref(),
        args.composite.as_deref(),
    );
    Ok(())
}
