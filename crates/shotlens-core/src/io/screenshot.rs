use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use tracing::debug;

use crate::error::{Result, ShotlensError};

/// Decode a device screenshot delivered as base64 into an RGB raster.
///
/// Accepts either bare base64 or a data URI such as
/// `data:image/png;base64,iVBOR...`. Whitespace and line breaks are ignored.
pub fn decode_base64_raster(encoded: &str) -> Result<RgbImage> {
    let payload = strip_data_uri(encoded.trim());
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(cleaned.as_bytes())?;

    let img = image::load_from_memory(&bytes)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(ShotlensError::InvalidDimensions { width, height });
    }

    debug!(width, height, bytes = bytes.len(), "decoded screenshot");
    Ok(rgb)
}

/// Encode a raster as a PNG data URI, the inverse of [`decode_base64_raster`].
pub fn encode_png_data_uri(raster: &RgbImage) -> Result<String> {
    let mut bytes = Vec::new();
    raster.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(&bytes)))
}

fn strip_data_uri(s: &str) -> &str {
    if s.starts_with("data:") {
        match s.find(";base64,") {
            Some(idx) => &s[idx + ";base64,".len()..],
            None => s,
        }
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_data_uri() {
        assert_eq!(strip_data_uri("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri("AAAA"), "AAAA");
    }
}
