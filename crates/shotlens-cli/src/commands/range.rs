use anyhow::Result;
use clap::Args;
use shotlens_core::color::{ColorBound, ColorMode};
use shotlens_core::config::ViewerConfig;

use super::{parse_values, ModeArg};
use crate::summary::print_range_summary;

#[derive(Args)]
pub struct RangeArgs {
    /// Picked color in the chosen mode, e.g. "30,200,180" (HSV) or "128" (gray)
    pub color: String,

    /// Color mode (defaults to the config's default mode)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Distance below and above each channel (capped at 100)
    #[arg(long)]
    pub tolerance: Option<u8>,
}

pub fn run(args: &RangeArgs, config: &ViewerConfig) -> Result<()> {
    let mode = args
        .mode
        .map(ColorMode::from)
        .unwrap_or(config.classifier.default_mode);
    let tolerance = args
        .tolerance
        .unwrap_or(config.classifier.default_tolerance);

    let values = parse_values(&args.color)?;
    if values.len() != mode.channels() {
        anyhow::bail!(
            "{mode} colors have {} value(s), got {}",
            mode.channels(),
            values.len()
        );
    }
    let color = ColorBound::clamped(mode, &values);
    let (lower, upper) = ColorBound::around(mode, color.as_slice(), tolerance);

    print_range_summary(mode, &color, tolerance, &lower, &upper);
    Ok(())
}
