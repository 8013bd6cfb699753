use std::sync::mpsc;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::BusyTask;

use super::{classify, io};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("shotlens-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    task: Option<BusyTask>,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            task,
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadScreenshot { tag, path } => {
                io::handle_load_screenshot(tag, &path, &tx, &ctx);
            }
            WorkerCommand::DecodeBase64 { tag, text } => {
                io::handle_decode_base64(tag, &text, &tx, &ctx);
            }
            WorkerCommand::Classify {
                tag,
                raster,
                lower,
                upper,
                mode,
                palette,
            } => {
                classify::handle_classify(tag, &raster, &lower, &upper, mode, palette, &tx, &ctx);
            }
            WorkerCommand::SaveImage {
                path,
                kind,
                raster,
                overlay,
            } => {
                io::handle_save_image(&path, kind, &raster, overlay.as_ref(), &tx, &ctx);
            }
        }
    }
}
