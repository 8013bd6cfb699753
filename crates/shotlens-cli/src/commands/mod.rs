pub mod classify;
pub mod config;
pub mod convert;
pub mod crop;
pub mod info;
pub mod pick;
pub mod range;

use anyhow::{Context, Result};
use clap::ValueEnum;
use shotlens_core::color::{ColorBound, ColorMode};
use shotlens_core::viewport::Roi;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Rgb,
    Hsv,
    Gray,
}

impl From<ModeArg> for ColorMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Rgb => ColorMode::Rgb,
            ModeArg::Hsv => ColorMode::Hsv,
            ModeArg::Gray => ColorMode::Gray,
        }
    }
}

/// Parse a comma-separated channel list such as `"10,20,30"`.
pub fn parse_values(s: &str) -> Result<Vec<i32>> {
    s.split(',')
        .map(|v| v.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid channel list '{s}' (expected e.g. '10,20,30')"))
}

/// Parse a bound for `mode`. The channel count must match; values are clamped.
pub fn parse_bound(s: &str, mode: ColorMode) -> Result<ColorBound> {
    let values = parse_values(s)?;
    if values.len() != mode.channels() {
        anyhow::bail!(
            "{mode} bounds need {} value(s), got {} in '{s}'",
            mode.channels(),
            values.len()
        );
    }
    Ok(ColorBound::clamped(mode, &values))
}

/// Parse an `r,g,b` triple of 8-bit values.
pub fn parse_rgb(s: &str) -> Result<[u8; 3]> {
    let values = parse_values(s)?;
    let [r, g, b] = values[..] else {
        anyhow::bail!("Expected three values r,g,b, got {}", values.len());
    };
    let channel = |v: i32| u8::try_from(v).with_context(|| format!("{v} is outside 0..=255"));
    Ok([channel(r)?, channel(g)?, channel(b)?])
}

/// Parse an ROI given as `x,y,width,height`.
pub fn parse_roi(s: &str) -> Result<Roi> {
    let values = parse_values(s)?;
    let [x, y, width, height] = values[..] else {
        anyhow::bail!("Expected four values x,y,width,height, got {}", values.len());
    };
    Ok(Roi::new(x, y, width, height))
}
