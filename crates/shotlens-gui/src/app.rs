use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Instant;

use image::RgbImage;
use shotlens_core::config::ViewerConfig;
use shotlens_core::session::{Apply, RequestSequencer};
use tracing::{debug, warn};

use crate::convert::{rgb_to_color_image, rgba_to_color_image};
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{BusyTask, PickerState, ToolState, UIState, ViewportState};
use crate::workers;

pub struct ShotlensApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub picker: PickerState,
    pub tools: ToolState,
    pub config: ViewerConfig,
    /// Tags screenshot loads so only the most recent one is shown.
    pub loads: RequestSequencer,
}

impl ShotlensApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())?;

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::new(config.viewport),
            picker: PickerState::new(&config.classifier),
            tools: ToolState::default(),
            config,
            loads: RequestSequencer::new(),
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ScreenshotLoaded { tag, label, raster } => {
                    if !self.loads.is_current(tag) {
                        debug!(tag = tag.value(), "discarding stale screenshot");
                        continue;
                    }
                    self.ui_state.finish();
                    self.open_screenshot(ctx, label, raster);
                }
                WorkerResult::ClassifyComplete {
                    tag,
                    result,
                    elapsed,
                } => {
                    if self.picker.classification.offer(tag, result) == Apply::Stale {
                        continue;
                    }
                    self.ui_state.finish();
                    self.update_overlay_texture(ctx);
                    if let Some(summary) = self.picker.match_summary() {
                        self.ui_state.add_log(format!(
                            "Matched {summary} in {}ms",
                            elapsed.as_millis()
                        ));
                    }
                }
                WorkerResult::Progress {
                    tag,
                    rows_done,
                    rows_total,
                } => {
                    if self.picker.classification.is_pending(tag) {
                        self.ui_state.progress_rows_done = Some(rows_done);
                        self.ui_state.progress_rows_total = Some(rows_total);
                    }
                }
                WorkerResult::OpenPicked { path } => {
                    self.request_load(path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::ImageSaved { path, kind } => {
                    self.ui_state
                        .add_log(format!("Saved {}: {}", kind.label(), path.display()));
                }
                WorkerResult::Error { task, message } => {
                    if task.is_some() && task == self.ui_state.running {
                        self.ui_state.finish();
                    }
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn open_screenshot(&mut self, ctx: &egui::Context, label: String, raster: Arc<RgbImage>) {
        self.viewport.reset();
        self.picker.reset();
        self.tools.clear();

        let texture = ctx.load_texture(
            "screenshot",
            rgb_to_color_image(&raster),
            egui::TextureOptions::NEAREST,
        );
        self.viewport.texture = Some(texture);
        self.viewport.needs_fit = true;

        self.ui_state.add_log(format!(
            "Opened: {label} ({}x{})",
            raster.width(),
            raster.height()
        ));
        self.ui_state.source_label = Some(label);
        self.picker.classifier.load(raster);
    }

    fn update_overlay_texture(&mut self, ctx: &egui::Context) {
        self.viewport.overlay_texture = self.picker.classification.get().map(|result| {
            ctx.load_texture(
                "overlay",
                rgba_to_color_image(&result.overlay),
                egui::TextureOptions::NEAREST,
            )
        });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn request_load(&mut self, path: PathBuf) {
        let tag = self.loads.issue();
        self.ui_state.begin(BusyTask::Loading);
        self.send_command(WorkerCommand::LoadScreenshot { tag, path });
    }

    pub fn request_decode(&mut self, text: String) {
        let tag = self.loads.issue();
        self.ui_state.begin(BusyTask::Loading);
        self.send_command(WorkerCommand::DecodeBase64 { tag, text });
    }

    /// Close the screenshot. Results still in flight are dropped when they arrive.
    pub fn close_screenshot(&mut self) {
        self.loads.invalidate();
        self.viewport.reset();
        self.picker.reset();
        self.tools.clear();
        self.ui_state.finish();
        self.ui_state.source_label = None;
    }

    pub fn has_screenshot(&self) -> bool {
        self.picker.classifier.is_ready()
    }

    /// Bounds or mode changed: drop the now-outdated match overlay and
    /// classify again once edits settle.
    pub fn schedule_classification(&mut self) {
        self.picker.invalidate_result();
        self.viewport.overlay_texture = None;
        if self.ui_state.running == Some(BusyTask::Classifying) {
            self.ui_state.finish();
        }
        self.picker.debouncer.schedule(Instant::now());
    }

    pub fn request_classification(&mut self) {
        self.picker.debouncer.cancel();
        let Some(raster) = self.picker.classifier.raster().cloned() else {
            warn!("classification requested before a screenshot was loaded");
            self.ui_state
                .add_log("No screenshot loaded; nothing to classify".into());
            return;
        };

        let (lower, upper) = self.picker.bounds();
        let tag = self.picker.classification.begin();
        self.ui_state.begin(BusyTask::Classifying);
        self.send_command(WorkerCommand::Classify {
            tag,
            raster,
            lower,
            upper,
            mode: self.picker.mode,
            palette: self.picker.classifier.palette(),
        });
    }

    fn tick_debounce(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.picker.debouncer.poll(now) {
            self.request_classification();
        } else if let Some(remaining) = self.picker.debouncer.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    pub fn apply_config(&mut self, config: ViewerConfig) {
        let image = self.viewport.image_size();
        self.viewport.engine = shotlens_core::viewport::Viewport::new(config.viewport);
        self.viewport.needs_fit = image.is_some();
        self.picker.apply_config(&config.classifier);
        self.config = config;
    }
}

impl eframe::App for ShotlensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.tick_debounce(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_paste_dialog {
            panels::paste::show(ctx, self);
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Shotlens")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Shotlens");
                        ui.label("Screenshot Color Picking");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// App whose worker commands land in the returned receiver instead of a thread.
    fn app() -> (egui::Context, ShotlensApp, mpsc::Receiver<WorkerCommand>) {
        let ctx = egui::Context::default();
        let mut app = ShotlensApp::new(&ctx, ViewerConfig::default()).unwrap();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        app.cmd_tx = cmd_tx;
        (ctx, app, cmd_rx)
    }

    #[test]
    fn test_picked_path_starts_a_busy_load() {
        let (ctx, mut app, cmd_rx) = app();
        app.result_tx
            .send(WorkerResult::OpenPicked {
                path: PathBuf::from("shot.png"),
            })
            .unwrap();
        app.poll_results(&ctx);

        assert_eq!(app.ui_state.running, Some(BusyTask::Loading));
        let Ok(WorkerCommand::LoadScreenshot { tag, path }) = cmd_rx.try_recv() else {
            panic!("expected a load command");
        };
        assert_eq!(path, PathBuf::from("shot.png"));
        assert!(app.loads.is_current(tag));
    }

    #[test]
    fn test_no_pick_leaves_inflight_load_current() {
        let (ctx, mut app, cmd_rx) = app();
        app.request_load(PathBuf::from("first.png"));
        let Ok(WorkerCommand::LoadScreenshot { tag, .. }) = cmd_rx.try_recv() else {
            panic!("expected a load command");
        };

        // A cancelled dialog sends nothing back.
        app.poll_results(&ctx);
        assert!(app.loads.is_current(tag));
        assert_eq!(app.ui_state.running, Some(BusyTask::Loading));
    }

    #[test]
    fn test_unrelated_error_keeps_classification_busy() {
        let (ctx, mut app, _cmd_rx) = app();
        app.ui_state.begin(BusyTask::Classifying);

        for task in [None, Some(BusyTask::Loading)] {
            app.result_tx
                .send(WorkerResult::Error {
                    task,
                    message: "Failed to import cfg.toml".into(),
                })
                .unwrap();
        }
        app.poll_results(&ctx);
        assert_eq!(app.ui_state.running, Some(BusyTask::Classifying));

        app.result_tx
            .send(WorkerResult::Error {
                task: Some(BusyTask::Classifying),
                message: "Classification failed".into(),
            })
            .unwrap();
        app.poll_results(&ctx);
        assert_eq!(app.ui_state.running, None);
        assert_eq!(app.ui_state.log_messages.len(), 3);
    }

    #[test]
    fn test_bound_edit_drops_shown_result() {
        let (ctx, mut app, _cmd_rx) = app();
        let raster = Arc::new(RgbImage::new(8, 8));
        app.picker.classifier.load(Arc::clone(&raster));
        app.request_classification();
        let tag = app.picker.classification.begin();
        let (lower, upper) = app.picker.bounds();
        let result =
            shotlens_core::color::classify(&raster, &lower, &upper, app.picker.mode).unwrap();

        app.schedule_classification();
        assert!(app.picker.match_summary().is_none());
        assert!(app.viewport.overlay_texture.is_none());
        assert_eq!(app.ui_state.running, None);
        assert!(app.picker.debouncer.is_pending());

        // The superseded run's result is not shown when it lands.
        app.result_tx
            .send(WorkerResult::ClassifyComplete {
                tag,
                result,
                elapsed: std::time::Duration::ZERO,
            })
            .unwrap();
        app.poll_results(&ctx);
        assert!(app.picker.match_summary().is_none());
    }
}
