use shotlens_core::config::ViewerConfig;
use shotlens_core::io::crop::template_file_name;

use crate::app::ShotlensApp;
use crate::messages::{SaveKind, WorkerCommand, WorkerResult};

pub fn show(ctx: &egui::Context, app: &mut ShotlensApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                if ui.button("Paste Base64...").clicked() {
                    ui.close();
                    app.ui_state.show_paste_dialog = true;
                }

                if ui
                    .add_enabled(app.has_screenshot(), egui::Button::new("Close Screenshot"))
                    .clicked()
                {
                    ui.close();
                    app.close_screenshot();
                }

                ui.separator();

                let can_save = app.picker.classification.get().is_some();
                if ui.add_enabled(can_save, egui::Button::new("Save Overlay...")).clicked() {
                    ui.close();
                    save_file(app, SaveKind::Overlay);
                }
                if ui.add_enabled(can_save, egui::Button::new("Save Composite...")).clicked() {
                    ui.close();
                    save_file(app, SaveKind::Composite);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let has = app.has_screenshot();
                if ui.add_enabled(has, egui::Button::new("Zoom In")).clicked() {
                    app.viewport.engine.zoom_in();
                }
                if ui.add_enabled(has, egui::Button::new("Zoom Out")).clicked() {
                    app.viewport.engine.zoom_out();
                }
                if ui.add_enabled(has, egui::Button::new("Fit")).clicked() {
                    ui.close();
                    app.viewport.engine.zoom_reset();
                }
                ui.separator();
                ui.checkbox(&mut app.viewport.show_overlay, "Show match overlay");
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.apply_config(ViewerConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Pick a screenshot on a helper thread; the load starts once a path comes back.
pub(crate) fn open_file(ctx: &egui::Context, app: &ShotlensApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Screenshots", &["png", "jpg", "jpeg", "bmp", "webp"])
            .add_filter("Base64 text", &["b64", "txt"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::OpenPicked { path });
            ctx.request_repaint();
        }
    });
}

pub(crate) fn save_file(app: &mut ShotlensApp, kind: SaveKind) {
    let Some(raster) = app.picker.classifier.raster().cloned() else {
        app.ui_state.add_log("Nothing to save: no screenshot loaded".into());
        return;
    };
    let overlay = app
        .picker
        .classification
        .get()
        .map(|result| result.overlay.clone());
    if kind.needs_overlay() && overlay.is_none() {
        app.ui_state
            .add_log("Nothing to save: run a classification first".into());
        return;
    }
    let default_name = match kind {
        SaveKind::Overlay => "overlay.png".to_string(),
        SaveKind::Composite => "composite.png".to_string(),
        SaveKind::Template { .. } => template_file_name(),
    };

    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .set_file_name(default_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage {
                path,
                kind,
                raster,
                overlay,
            });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &ShotlensApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match ViewerConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                task: None,
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_config(ctx: &egui::Context, app: &mut ShotlensApp) {
    let content = match app.config.to_toml() {
        Ok(content) => content,
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
    };
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("shotlens.toml")
            .save_file()
        {
            let message = match std::fs::write(&path, content) {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    task: None,
                    message: format!("Failed to write {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(message);
            ctx.request_repaint();
        }
    });
}
