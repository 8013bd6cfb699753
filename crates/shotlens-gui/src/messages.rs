use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use image::{RgbImage, RgbaImage};
use shotlens_core::color::{ClassificationResult, ColorBound, ColorMode, OverlayPalette};
use shotlens_core::config::ViewerConfig;
use shotlens_core::session::RequestTag;
use shotlens_core::viewport::Roi;

use crate::states::BusyTask;

/// What gets written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveKind {
    /// The RGBA overlay alone.
    Overlay,
    /// The screenshot with the overlay blended on top.
    Composite,
    /// The `roi` region of the screenshot, with the overlay blended in when
    /// `with_mask` is set.
    Template { roi: Roi, with_mask: bool },
}

impl SaveKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::Composite => "composite",
            Self::Template { .. } => "template",
        }
    }

    pub fn needs_overlay(self) -> bool {
        match self {
            Self::Overlay | Self::Composite => true,
            Self::Template { with_mask, .. } => with_mask,
        }
    }
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Load a screenshot file (image or base64 text).
    LoadScreenshot { tag: RequestTag, path: PathBuf },

    /// Decode a pasted base64 / data URI screenshot.
    DecodeBase64 { tag: RequestTag, text: String },

    /// Classify the whole raster against the bounds.
    Classify {
        tag: RequestTag,
        raster: Arc<RgbImage>,
        lower: ColorBound,
        upper: ColorBound,
        mode: ColorMode,
        palette: OverlayPalette,
    },

    /// Write the overlay, the composite or a template to disk.
    SaveImage {
        path: PathBuf,
        kind: SaveKind,
        raster: Arc<RgbImage>,
        overlay: Option<RgbaImage>,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ScreenshotLoaded {
        tag: RequestTag,
        label: String,
        raster: Arc<RgbImage>,
    },

    ClassifyComplete {
        tag: RequestTag,
        result: ClassificationResult,
        elapsed: Duration,
    },

    /// Rows scanned so far by a running classification.
    Progress {
        tag: RequestTag,
        rows_done: usize,
        rows_total: usize,
    },

    /// A screenshot file was chosen in the open dialog.
    OpenPicked {
        path: PathBuf,
    },
    ConfigImported {
        config: ViewerConfig,
    },
    ImageSaved {
        path: PathBuf,
        kind: SaveKind,
    },
    /// `task` is the busy task the failure ends, if any.
    Error {
        task: Option<BusyTask>,
        message: String,
    },
    Log {
        message: String,
    },
}
