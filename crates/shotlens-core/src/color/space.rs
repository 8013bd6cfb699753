use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{CHANNEL_MAX, HUE_MAX, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// Color space a pixel is compared in.
///
/// The numeric codes are the color-conversion codes the automation backend
/// expects in its `method` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsv,
    Gray,
}

impl ColorMode {
    pub const ALL: &[Self] = &[Self::Rgb, Self::Hsv, Self::Gray];

    /// Number of channels in this mode's representation.
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb | Self::Hsv => 3,
            Self::Gray => 1,
        }
    }

    /// Largest valid value of channel `index`.
    pub fn channel_max(self, index: usize) -> u8 {
        match (self, index) {
            (Self::Hsv, 0) => HUE_MAX,
            _ => CHANNEL_MAX,
        }
    }

    /// Backend color-conversion code (4 = RGB, 40 = HSV, 6 = GRAY).
    pub fn code(self) -> u32 {
        match self {
            Self::Rgb => 4,
            Self::Hsv => 40,
            Self::Gray => 6,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            4 => Some(Self::Rgb),
            40 => Some(Self::Hsv),
            6 => Some(Self::Gray),
            _ => None,
        }
    }

    /// Convert one RGB pixel into this mode's channel values.
    pub fn convert(self, rgb: [u8; 3]) -> Channels {
        let [r, g, b] = rgb;
        match self {
            Self::Rgb => Channels::three(rgb),
            Self::Hsv => Channels::three(rgb_to_hsv(r, g, b)),
            Self::Gray => Channels::one(rgb_to_gray(r, g, b)),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Hsv => write!(f, "HSV"),
            Self::Gray => write!(f, "GRAY"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" | "4" => Ok(Self::Rgb),
            "hsv" | "40" => Ok(Self::Hsv),
            "gray" | "grey" | "6" => Ok(Self::Gray),
            other => Err(format!("unknown color mode '{other}' (expected rgb, hsv or gray)")),
        }
    }
}

/// Channel values of one pixel: one entry for gray, three otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channels {
    data: [u8; 3],
    len: usize,
}

impl Channels {
    pub fn one(v: u8) -> Self {
        Self {
            data: [v, 0, 0],
            len: 1,
        }
    }

    pub fn three(v: [u8; 3]) -> Self {
        Self { data: v, len: 3 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// RGB to HSV, quantized the way the backend's imaging library stores it:
/// hue in half-degrees `0..180`, saturation and value in `0..=255`.
///
/// Achromatic pixels get hue 0. A hue that rounds up to 180 wraps to 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = max - min;

    let mut hue = if diff == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / diff)
    } else if max == gf {
        60.0 * ((bf - rf) / diff + 2.0)
    } else {
        60.0 * ((rf - gf) / diff + 4.0)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if max == 0.0 { 0.0 } else { diff / max };

    let mut h = (hue / 2.0).round() as u32;
    if h >= HUE_MAX as u32 {
        h = 0;
    }
    let s = (saturation * 255.0).round() as u8;
    let v = (max * 255.0).round() as u8;

    [h as u8, s, v]
}

/// Luma with ITU-R BT.601 weights, rounded to the nearest integer.
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Inverse of [`rgb_to_hsv`]'s quantization followed by the six-sector
/// decomposition. Lossy: the hue is only known to within one degree.
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> [u8; 3] {
    let hue = (h.min(HUE_MAX) as f32 * 2.0) % 360.0;
    let sat = s as f32 / 255.0;
    let val = v as f32 / 255.0;

    let c = val * sat;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = val - c;

    let (r1, g1, b1) = match (hue / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r1), to_u8(g1), to_u8(b1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_wraps_below_half_circle() {
        // Natural hue ~359.3 degrees rounds to 180 half-degrees.
        let [h, _, _] = rgb_to_hsv(255, 0, 3);
        assert_eq!(h, 0);
    }

    #[test]
    fn test_channels_slice_len() {
        assert_eq!(Channels::one(7).as_slice(), &[7]);
        assert_eq!(Channels::three([1, 2, 3]).as_slice(), &[1, 2, 3]);
    }
}
