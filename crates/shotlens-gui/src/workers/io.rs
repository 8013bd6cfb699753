use std::path::Path;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use image::{RgbImage, RgbaImage};
use shotlens_core::color::composite_overlay;
use shotlens_core::io::crop::crop_roi;
use shotlens_core::io::image_io::{load_raster, save_rgb, save_rgba_png};
use shotlens_core::io::screenshot::decode_base64_raster;
use shotlens_core::session::RequestTag;

use crate::messages::{SaveKind, WorkerResult};
use crate::states::BusyTask;

use super::dispatch::{send, send_error, send_log};

pub(super) fn handle_load_screenshot(
    tag: RequestTag,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_raster(path).with_context(|| format!("Failed to load {}", path.display())) {
        Ok(raster) => {
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            send(
                tx,
                ctx,
                WorkerResult::ScreenshotLoaded {
                    tag,
                    label,
                    raster: Arc::new(raster),
                },
            );
        }
        Err(e) => send_error(tx, ctx, Some(BusyTask::Loading), format!("{e:#}")),
    }
}

pub(super) fn handle_decode_base64(
    tag: RequestTag,
    text: &str,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match decode_base64_raster(text).context("Failed to decode pasted screenshot") {
        Ok(raster) => send(
            tx,
            ctx,
            WorkerResult::ScreenshotLoaded {
                tag,
                label: "pasted".into(),
                raster: Arc::new(raster),
            },
        ),
        Err(e) => send_error(tx, ctx, Some(BusyTask::Loading), format!("{e:#}")),
    }
}

pub(super) fn handle_save_image(
    path: &Path,
    kind: SaveKind,
    raster: &RgbImage,
    overlay: Option<&RgbaImage>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match write_image(path, kind, raster, overlay)
        .with_context(|| format!("Failed to save {}", path.display()))
    {
        Ok(()) => {
            send_log(tx, ctx, format!("Wrote {} image", kind.label()));
            send(
                tx,
                ctx,
                WorkerResult::ImageSaved {
                    path: path.to_path_buf(),
                    kind,
                },
            );
        }
        Err(e) => send_error(tx, ctx, None, format!("{e:#}")),
    }
}

fn write_image(
    path: &Path,
    kind: SaveKind,
    raster: &RgbImage,
    overlay: Option<&RgbaImage>,
) -> anyhow::Result<()> {
    match (kind, overlay) {
        (SaveKind::Overlay, Some(overlay)) => save_rgba_png(overlay, path)?,
        (SaveKind::Composite, Some(overlay)) => {
            save_rgb(&composite_overlay(raster, overlay)?, path)?
        }
        (SaveKind::Template { roi, with_mask }, overlay) => {
            let template = match (with_mask, overlay) {
                (false, _) => crop_roi(raster, roi)?,
                (true, Some(overlay)) => crop_roi(&composite_overlay(raster, overlay)?, roi)?,
                (true, None) => anyhow::bail!("no match mask to blend into the template"),
            };
            save_rgb(&template, path)?
        }
        (SaveKind::Overlay | SaveKind::Composite, None) => {
            anyhow::bail!("no classification to save")
        }
    }
    Ok(())
}
