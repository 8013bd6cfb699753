use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{ColorMode, OverlayPalette};
use crate::consts::{
    DEFAULT_CONTAINER_PADDING, DEFAULT_DEBOUNCE_MS, DEFAULT_TOLERANCE, MATCH_OVERLAY_RGBA,
    MAX_SCALE, MIN_SCALE, UNMATCHED_OVERLAY_RGBA, ZOOM_STEP,
};
use crate::error::{Result, ShotlensError};

/// Top-level viewer settings, loadable from TOML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl ViewerConfig {
    /// Read a TOML config file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ShotlensError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ShotlensError::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        let v = &self.viewport;
        if !(v.min_scale > 0.0 && v.min_scale <= v.max_scale) {
            return Err(ShotlensError::Config(format!(
                "viewport scale range [{}, {}] is invalid",
                v.min_scale, v.max_scale
            )));
        }
        if v.zoom_step <= 0.0 {
            return Err(ShotlensError::Config(format!(
                "zoom_step must be positive, got {}",
                v.zoom_step
            )));
        }
        Ok(())
    }
}

/// Scale limits and fit padding for the viewport engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_min_scale")]
    pub min_scale: f32,
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
    /// Pixels subtracted from the container before fitting.
    #[serde(default = "default_container_padding")]
    pub container_padding: f32,
}

fn default_min_scale() -> f32 {
    MIN_SCALE
}
fn default_max_scale() -> f32 {
    MAX_SCALE
}
fn default_zoom_step() -> f32 {
    ZOOM_STEP
}
fn default_container_padding() -> f32 {
    DEFAULT_CONTAINER_PADDING
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_step: ZOOM_STEP,
            container_padding: DEFAULT_CONTAINER_PADDING,
        }
    }
}

/// Defaults for the color range tool and the match overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub default_mode: ColorMode,
    #[serde(default = "default_tolerance")]
    pub default_tolerance: u8,
    /// Delay after the last bound edit before re-classifying.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_match_color")]
    pub match_color: [u8; 4],
    #[serde(default = "default_unmatched_color")]
    pub unmatched_color: [u8; 4],
}

fn default_tolerance() -> u8 {
    DEFAULT_TOLERANCE
}
fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
fn default_match_color() -> [u8; 4] {
    MATCH_OVERLAY_RGBA
}
fn default_unmatched_color() -> [u8; 4] {
    UNMATCHED_OVERLAY_RGBA
}

impl ClassifierConfig {
    pub fn palette(&self) -> OverlayPalette {
        OverlayPalette {
            matched: self.match_color,
            unmatched: self.unmatched_color,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_mode: ColorMode::default(),
            default_tolerance: DEFAULT_TOLERANCE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            match_color: MATCH_OVERLAY_RGBA,
            unmatched_color: UNMATCHED_OVERLAY_RGBA,
        }
    }
}
