use std::time::{SystemTime, UNIX_EPOCH};

use image::{imageops, RgbImage};

use crate::error::{Result, ShotlensError};
use crate::viewport::Roi;

/// Copy the `roi` region out of `raster`, e.g. to save it as a match template.
///
/// The region must be non-empty and lie entirely inside the raster.
pub fn crop_roi(raster: &RgbImage, roi: Roi) -> Result<RgbImage> {
    let (src_w, src_h) = raster.dimensions();
    if roi.width <= 0 || roi.height <= 0 {
        return Err(ShotlensError::InvalidCrop(format!(
            "ROI {roi} has no area"
        )));
    }
    if roi.x < 0
        || roi.y < 0
        || roi.x as i64 + roi.width as i64 > src_w as i64
        || roi.y as i64 + roi.height as i64 > src_h as i64
    {
        return Err(ShotlensError::InvalidCrop(format!(
            "ROI {roi} exceeds image dimensions ({src_w}x{src_h})"
        )));
    }

    Ok(imageops::crop_imm(
        raster,
        roi.x as u32,
        roi.y as u32,
        roi.width as u32,
        roi.height as u32,
    )
    .to_image())
}

/// `template_<unix millis>.png`, the default name for a saved template.
pub fn template_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("template_{millis}.png")
}
