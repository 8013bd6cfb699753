use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};

use crate::error::{Result, ShotlensError};

use super::screenshot::decode_base64_raster;

/// Load a screenshot from disk as RGB8.
///
/// Files ending in `.b64` or `.txt` are read as base64 text (optionally a
/// data URI); everything else goes through the image decoder.
pub fn load_raster(path: &Path) -> Result<RgbImage> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("b64" | "txt") => {
            let text = std::fs::read_to_string(path)?;
            decode_base64_raster(&text)
        }
        _ => {
            let rgb = image::open(path)?.to_rgb8();
            let (width, height) = rgb.dimensions();
            if width == 0 || height == 0 {
                return Err(ShotlensError::InvalidDimensions { width, height });
            }
            Ok(rgb)
        }
    }
}

/// Save an overlay (or any RGBA raster) as PNG.
pub fn save_rgba_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGB raster, choosing the format from the file extension (PNG by default).
pub fn save_rgb(img: &RgbImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => img.save_with_format(path, ImageFormat::Jpeg)?,
        Some("tiff" | "tif") => img.save_with_format(path, ImageFormat::Tiff)?,
        _ => img.save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}
