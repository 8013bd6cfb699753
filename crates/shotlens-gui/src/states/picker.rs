use std::sync::Arc;
use std::time::Duration;

use image::RgbImage;
use shotlens_core::color::{
    pick_pixel_color, ClassificationResult, Classifier, ColorBound, ColorMode, PickedColor,
};
use shotlens_core::config::ClassifierConfig;
use shotlens_core::session::{Debouncer, LatestSlot};

/// Color range tool: picked color, editable bounds and the latest classification.
pub struct PickerState {
    pub mode: ColorMode,
    pub tolerance: u8,
    /// Bound components as edited by the sliders; only the first
    /// `mode.channels()` entries are used.
    pub lower: [i32; 3],
    pub upper: [i32; 3],
    pub picked: Option<PickedColor>,
    /// Image pixel of the last pick, kept so a mode switch can re-sample it.
    pub picked_at: Option<(i64, i64)>,
    pub classifier: Classifier,
    pub classification: LatestSlot<ClassificationResult>,
    pub debouncer: Debouncer,
}

impl PickerState {
    pub fn new(config: &ClassifierConfig) -> Self {
        let mut state = Self {
            mode: config.default_mode,
            tolerance: config.default_tolerance,
            lower: [0; 3],
            upper: [0; 3],
            picked: None,
            picked_at: None,
            classifier: Classifier::new(config.palette()),
            classification: LatestSlot::new(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
        };
        state.set_full_range();
        state
    }

    /// Current bounds, clamped to the mode's channel ranges.
    pub fn bounds(&self) -> (ColorBound, ColorBound) {
        let n = self.mode.channels();
        (
            ColorBound::clamped(self.mode, &self.lower[..n]),
            ColorBound::clamped(self.mode, &self.upper[..n]),
        )
    }

    pub fn set_full_range(&mut self) {
        let (lower, upper) = ColorBound::full_range(self.mode);
        self.set_bounds(&lower, &upper);
    }

    fn set_bounds(&mut self, lower: &ColorBound, upper: &ColorBound) {
        self.lower = [0; 3];
        self.upper = [0; 3];
        for (slot, &v) in self.lower.iter_mut().zip(lower.as_slice()) {
            *slot = v as i32;
        }
        for (slot, &v) in self.upper.iter_mut().zip(upper.as_slice()) {
            *slot = v as i32;
        }
    }

    /// Take a freshly picked color and center the bounds on it.
    pub fn apply_pick(&mut self, picked: PickedColor, at: (i64, i64)) {
        let (lower, upper) = picked.range(self.tolerance);
        self.set_bounds(&lower, &upper);
        self.picked = Some(picked);
        self.picked_at = Some(at);
    }

    /// Re-derive the bounds from the picked color after a tolerance change.
    pub fn reapply_tolerance(&mut self) -> bool {
        match self.picked.as_ref().map(|p| p.range(self.tolerance)) {
            Some((lower, upper)) => {
                self.set_bounds(&lower, &upper);
                self.invalidate_result();
                true
            }
            None => false,
        }
    }

    /// Drop the shown classification; it no longer matches the bounds.
    /// Classifications still in flight become stale.
    pub fn invalidate_result(&mut self) {
        self.classification.clear();
    }

    /// Switch color mode, re-sampling the last picked pixel when possible.
    pub fn set_mode(&mut self, mode: ColorMode, raster: Option<&Arc<RgbImage>>) {
        self.mode = mode;
        self.invalidate_result();
        let repicked = match (raster, self.picked_at) {
            (Some(raster), Some((x, y))) => pick_pixel_color(raster, x, y, mode).ok(),
            _ => None,
        };
        match repicked {
            Some(picked) => {
                let (lower, upper) = picked.range(self.tolerance);
                self.set_bounds(&lower, &upper);
                self.picked = Some(picked);
            }
            None => {
                self.picked = None;
                self.set_full_range();
            }
        }
    }

    pub fn match_summary(&self) -> Option<String> {
        self.classification.get().map(|r| {
            format!(
                "{} / {} px ({:.2}%)",
                r.matched_count,
                r.total_pixels,
                r.match_fraction() * 100.0
            )
        })
    }

    /// Forget the screenshot; in-flight classifications become stale.
    pub fn reset(&mut self) {
        self.classifier.clear();
        self.classification.clear();
        self.debouncer.cancel();
        self.picked = None;
        self.picked_at = None;
        self.set_full_range();
    }

    pub fn apply_config(&mut self, config: &ClassifierConfig) {
        let raster = self.classifier.raster().cloned();
        self.classifier = Classifier::new(config.palette());
        if let Some(raster) = raster {
            self.classifier.load(raster);
        }
        self.tolerance = config.default_tolerance;
        self.debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use shotlens_core::color::classify;

    use super::*;

    fn raster() -> Arc<RgbImage> {
        Arc::new(RgbImage::from_pixel(4, 4, Rgb([100, 150, 200])))
    }

    fn with_result(raster: &Arc<RgbImage>) -> PickerState {
        let mut picker = PickerState::new(&ClassifierConfig::default());
        picker.classifier.load(Arc::clone(raster));
        let (lower, upper) = picker.bounds();
        let result = classify(raster, &lower, &upper, picker.mode).unwrap();
        let tag = picker.classification.begin();
        picker.classification.offer(tag, result);
        assert!(picker.match_summary().is_some());
        picker
    }

    #[test]
    fn test_mode_change_drops_result() {
        let raster = raster();
        let mut picker = with_result(&raster);
        let in_flight = picker.classification.begin();

        picker.set_mode(ColorMode::Gray, Some(&raster));

        assert!(picker.classification.get().is_none());
        assert!(picker.match_summary().is_none());
        assert!(!picker.classification.is_pending(in_flight));
    }

    #[test]
    fn test_tolerance_change_drops_result() {
        let raster = raster();
        let mut picker = with_result(&raster);
        let picked = pick_pixel_color(&raster, 1, 1, ColorMode::Rgb).unwrap();
        picker.apply_pick(picked, (1, 1));

        picker.tolerance = 30;
        assert!(picker.reapply_tolerance());
        assert!(picker.classification.get().is_none());
        assert_eq!(picker.lower, [70, 120, 170]);
        assert_eq!(picker.upper, [130, 180, 230]);
    }

    #[test]
    fn test_tolerance_without_pick_keeps_result() {
        let raster = raster();
        let mut picker = with_result(&raster);
        picker.tolerance = 30;
        assert!(!picker.reapply_tolerance());
        assert!(picker.classification.get().is_some());
    }

    #[test]
    fn test_mode_change_resamples_pick() {
        let raster = raster();
        let mut picker = with_result(&raster);
        let picked = pick_pixel_color(&raster, 0, 0, ColorMode::Rgb).unwrap();
        picker.apply_pick(picked, (0, 0));

        picker.set_mode(ColorMode::Gray, Some(&raster));
        let picked = picker.picked.as_ref().unwrap();
        assert_eq!(picked.values.as_slice(), &[141]);
        assert_eq!(picker.bounds().0.as_slice(), &[131]);
    }
}
