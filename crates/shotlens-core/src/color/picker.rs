use image::RgbImage;

use crate::error::{Result, ShotlensError};
use crate::geometry::Vec2;
use crate::viewport::Viewport;

use super::bound::ColorBound;
use super::space::{ColorMode, Channels};

/// A single sampled pixel, in both RGB and the active mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedColor {
    pub mode: ColorMode,
    pub rgb: [u8; 3],
    pub values: Channels,
    /// Human-readable form, e.g. `HSV(60, 255, 255)`.
    pub display: String,
}

impl PickedColor {
    fn new(mode: ColorMode, rgb: [u8; 3]) -> Self {
        let values = mode.convert(rgb);
        let joined = join(values.as_slice());
        let display = format!("{mode}({joined})");
        Self {
            mode,
            rgb,
            values,
            display,
        }
    }

    /// Value as pasted into a node field: `[[r, g, b]]` or `[[v]]`.
    pub fn value_literal(&self) -> String {
        format!("[[{}]]", join(self.values.as_slice()))
    }

    /// Key/value form for the `lower` field: `lower: [[r, g, b]]`.
    pub fn key_value_literal(&self) -> String {
        format!("lower: {}", self.value_literal())
    }

    /// Bounds `tolerance` wide around this color.
    pub fn range(&self, tolerance: u8) -> (ColorBound, ColorBound) {
        ColorBound::around(self.mode, self.values.as_slice(), tolerance)
    }
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sample exactly one pixel at integer image coordinates.
pub fn pick_pixel_color(raster: &RgbImage, x: i64, y: i64, mode: ColorMode) -> Result<PickedColor> {
    let (width, height) = raster.dimensions();
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return Err(ShotlensError::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    let rgb = raster.get_pixel(x as u32, y as u32).0;
    Ok(PickedColor::new(mode, rgb))
}

/// Sample the pixel under a container-relative screen position.
pub fn pick_at_screen(
    raster: &RgbImage,
    viewport: &Viewport,
    screen: Vec2,
    mode: ColorMode,
) -> Result<PickedColor> {
    let p = viewport.to_image_space(screen);
    pick_pixel_color(raster, p.x.floor() as i64, p.y.floor() as i64, mode)
}
