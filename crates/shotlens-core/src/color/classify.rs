use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use image::{RgbImage, RgbaImage};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::consts::{MATCH_OVERLAY_RGBA, PARALLEL_PIXEL_THRESHOLD, UNMATCHED_OVERLAY_RGBA};
use crate::error::{Result, ShotlensError};

use super::bound::ColorBound;
use super::space::ColorMode;

/// Overlay colors for matched and unmatched pixels (RGBA).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPalette {
    pub matched: [u8; 4],
    pub unmatched: [u8; 4],
}

impl Default for OverlayPalette {
    fn default() -> Self {
        Self {
            matched: MATCH_OVERLAY_RGBA,
            unmatched: UNMATCHED_OVERLAY_RGBA,
        }
    }
}

/// Outcome of one classification pass.
#[derive(Clone, Debug)]
pub struct ClassificationResult {
    pub matched_count: u64,
    pub total_pixels: u64,
    /// Same size as the source; one palette color per pixel.
    pub overlay: RgbaImage,
}

impl ClassificationResult {
    /// Matched share in `[0.0, 1.0]`; 0 for an empty raster.
    pub fn match_fraction(&self) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            self.matched_count as f64 / self.total_pixels as f64
        }
    }
}

/// Classify every pixel of `raster` against the inclusive `[lower, upper]` range in `mode`.
pub fn classify(
    raster: &RgbImage,
    lower: &ColorBound,
    upper: &ColorBound,
    mode: ColorMode,
) -> Result<ClassificationResult> {
    classify_with_progress(raster, lower, upper, mode, OverlayPalette::default(), |_| {})
}

/// Like [`classify`], with a custom palette and a callback receiving the number
/// of rows scanned so far. The callback may be invoked from worker threads.
pub fn classify_with_progress<F>(
    raster: &RgbImage,
    lower: &ColorBound,
    upper: &ColorBound,
    mode: ColorMode,
    palette: OverlayPalette,
    on_rows: F,
) -> Result<ClassificationResult>
where
    F: Fn(usize) + Sync,
{
    check_bound_len(mode, lower)?;
    check_bound_len(mode, upper)?;

    let (w, h) = raster.dimensions();
    let total_pixels = w as u64 * h as u64;
    if total_pixels == 0 {
        return Ok(ClassificationResult {
            matched_count: 0,
            total_pixels: 0,
            overlay: RgbaImage::new(w, h),
        });
    }

    let start = Instant::now();
    let src = raster.as_raw();
    let mut buf = vec![0u8; w as usize * h as usize * 4];
    let src_stride = w as usize * 3;
    let dst_stride = w as usize * 4;
    let range = RangeTest::new(lower, upper);

    let matched_count = if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        let rows_done = AtomicUsize::new(0);
        src.par_chunks(src_stride)
            .zip(buf.par_chunks_mut(dst_stride))
            .map(|(src_row, dst_row)| {
                let n = classify_row(src_row, dst_row, mode, &range, &palette);
                on_rows(rows_done.fetch_add(1, Ordering::Relaxed) + 1);
                n
            })
            .sum::<u64>()
    } else {
        let mut matched = 0u64;
        for (row, (src_row, dst_row)) in src
            .chunks(src_stride)
            .zip(buf.chunks_mut(dst_stride))
            .enumerate()
        {
            matched += classify_row(src_row, dst_row, mode, &range, &palette);
            on_rows(row + 1);
        }
        matched
    };

    let overlay = RgbaImage::from_raw(w, h, buf)
        .ok_or(ShotlensError::InvalidDimensions { width: w, height: h })?;

    debug!(
        width = w,
        height = h,
        %mode,
        matched_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "classified raster"
    );

    Ok(ClassificationResult {
        matched_count,
        total_pixels,
        overlay,
    })
}

fn check_bound_len(mode: ColorMode, bound: &ColorBound) -> Result<()> {
    if bound.len() != mode.channels() {
        warn!(%mode, got = bound.len(), "color bound length does not match mode");
        return Err(ShotlensError::BoundLengthMismatch {
            mode: mode.to_string(),
            expected: mode.channels(),
            got: bound.len(),
        });
    }
    Ok(())
}

/// Pre-sliced bounds for the per-pixel inclusive test.
struct RangeTest<'a> {
    lower: &'a [u8],
    upper: &'a [u8],
}

impl<'a> RangeTest<'a> {
    fn new(lower: &'a ColorBound, upper: &'a ColorBound) -> Self {
        Self {
            lower: lower.as_slice(),
            upper: upper.as_slice(),
        }
    }

    fn contains(&self, values: &[u8]) -> bool {
        values
            .iter()
            .zip(self.lower.iter().zip(self.upper))
            .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}

fn classify_row(
    src_row: &[u8],
    dst_row: &mut [u8],
    mode: ColorMode,
    range: &RangeTest<'_>,
    palette: &OverlayPalette,
) -> u64 {
    let mut matched = 0u64;
    for (px, out) in src_row.chunks_exact(3).zip(dst_row.chunks_exact_mut(4)) {
        let channels = mode.convert([px[0], px[1], px[2]]);
        if range.contains(channels.as_slice()) {
            matched += 1;
            out.copy_from_slice(&palette.matched);
        } else {
            out.copy_from_slice(&palette.unmatched);
        }
    }
    matched
}

/// Alpha-blend `overlay` over `raster`. Both must have the same dimensions.
pub fn composite_overlay(raster: &RgbImage, overlay: &RgbaImage) -> Result<RgbImage> {
    if raster.dimensions() != overlay.dimensions() {
        let (width, height) = overlay.dimensions();
        return Err(ShotlensError::InvalidDimensions { width, height });
    }

    let mut out = raster.clone();
    for (dst, src) in out.pixels_mut().zip(overlay.pixels()) {
        let alpha = src.0[3] as f32 / 255.0;
        for c in 0..3 {
            let blended = src.0[c] as f32 * alpha + dst.0[c] as f32 * (1.0 - alpha);
            dst.0[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}

/// Holds the currently loaded screenshot and refuses to classify until one exists.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    raster: Option<Arc<RgbImage>>,
    palette: OverlayPalette,
}

impl Classifier {
    pub fn new(palette: OverlayPalette) -> Self {
        Self {
            raster: None,
            palette,
        }
    }

    pub fn load(&mut self, raster: Arc<RgbImage>) {
        self.raster = Some(raster);
    }

    pub fn clear(&mut self) {
        self.raster = None;
    }

    pub fn is_ready(&self) -> bool {
        self.raster.is_some()
    }

    pub fn raster(&self) -> Option<&Arc<RgbImage>> {
        self.raster.as_ref()
    }

    pub fn palette(&self) -> OverlayPalette {
        self.palette
    }

    pub fn classify(
        &self,
        lower: &ColorBound,
        upper: &ColorBound,
        mode: ColorMode,
    ) -> Result<ClassificationResult> {
        let raster = self.raster.as_ref().ok_or(ShotlensError::NotReady)?;
        classify_with_progress(raster, lower, upper, mode, self.palette, |_| {})
    }
}
