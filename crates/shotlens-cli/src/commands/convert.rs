use anyhow::Result;
use clap::Args;
use shotlens_core::color::{hsv_to_rgb, rgb_to_gray, rgb_to_hsv};

use super::parse_rgb;

#[derive(Args)]
pub struct ConvertArgs {
    /// RGB color, e.g. "100,150,200"
    pub rgb: String,
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    let [r, g, b] = parse_rgb(&args.rgb)?;
    let [h, s, v] = rgb_to_hsv(r, g, b);
    let gray = rgb_to_gray(r, g, b);
    let back = hsv_to_rgb(h, s, v);

    println!("RGB:         [{}, {}, {}]", r, g, b);
    println!("HSV:         [{}, {}, {}]  (hue 0-180)", h, s, v);
    println!("GRAY:        {}", gray);
    println!("HSV -> RGB:  [{}, {}, {}]", back[0], back[1], back[2]);

    Ok(())
}
