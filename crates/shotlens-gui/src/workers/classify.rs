use std::sync::mpsc;
use std::time::Instant;

use image::RgbImage;
use shotlens_core::color::{classify_with_progress, ColorBound, ColorMode, OverlayPalette};
use shotlens_core::session::RequestTag;

use crate::messages::WorkerResult;
use crate::states::BusyTask;

use super::dispatch::{send, send_error};

/// Rows between progress messages.
const PROGRESS_EVERY_ROWS: usize = 64;

#[allow(clippy::too_many_arguments)]
pub(super) fn handle_classify(
    tag: RequestTag,
    raster: &RgbImage,
    lower: &ColorBound,
    upper: &ColorBound,
    mode: ColorMode,
    palette: OverlayPalette,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let rows_total = raster.height() as usize;

    let progress = |rows_done: usize| {
        if rows_done % PROGRESS_EVERY_ROWS == 0 || rows_done == rows_total {
            send(
                tx,
                ctx,
                WorkerResult::Progress {
                    tag,
                    rows_done,
                    rows_total,
                },
            );
        }
    };

    match classify_with_progress(raster, lower, upper, mode, palette, progress) {
        Ok(result) => send(
            tx,
            ctx,
            WorkerResult::ClassifyComplete {
                tag,
                result,
                elapsed: start.elapsed(),
            },
        ),
        Err(e) => send_error(
            tx,
            ctx,
            Some(BusyTask::Classifying),
            format!("Classification failed: {e}"),
        ),
    }
}
