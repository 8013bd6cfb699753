use shotlens_core::color::ColorMode;
use shotlens_core::consts::MAX_TOLERANCE;

use crate::app::ShotlensApp;
use crate::messages::SaveKind;
use crate::panels::helpers::{copy_row, enum_combo, section_header};
use crate::panels::menu_bar::save_file;

fn channel_labels(mode: ColorMode) -> &'static [&'static str] {
    match mode {
        ColorMode::Rgb => &["R", "G", "B"],
        ColorMode::Hsv => &["H", "S", "V"],
        ColorMode::Gray => &["Gray"],
    }
}

pub(super) fn color_range_section(ui: &mut egui::Ui, app: &mut ShotlensApp) {
    let summary = app.picker.match_summary();
    section_header(ui, "Color Range", summary.as_deref());
    ui.add_space(4.0);

    let mut mode = app.picker.mode;
    if enum_combo(ui, "Mode", &mut mode, ColorMode::ALL) {
        let raster = app.picker.classifier.raster().cloned();
        app.picker.set_mode(mode, raster.as_ref());
        app.schedule_classification();
    }

    let mut tolerance = app.picker.tolerance;
    if ui
        .add(egui::Slider::new(&mut tolerance, 0..=MAX_TOLERANCE).text("Tolerance"))
        .changed()
    {
        app.picker.tolerance = tolerance;
        if app.picker.reapply_tolerance() {
            app.schedule_classification();
        }
    }

    ui.add_space(4.0);
    let mut changed = false;
    let mode = app.picker.mode;
    for (i, label) in channel_labels(mode).iter().enumerate() {
        let max = mode.channel_max(i) as i32;
        ui.small(*label);
        changed |= ui
            .add(egui::Slider::new(&mut app.picker.lower[i], 0..=max).text("low"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut app.picker.upper[i], 0..=max).text("high"))
            .changed();
    }
    if changed {
        app.schedule_classification();
    }

    let (lower, upper) = app.picker.bounds();
    if lower.is_inverted(&upper) {
        ui.colored_label(
            egui::Color32::from_rgb(230, 160, 60),
            "Lower exceeds upper on some channel; nothing will match.",
        );
    }
    copy_row(ui, "lower:", &lower.to_string());
    copy_row(ui, "upper:", &upper.to_string());
    copy_row(ui, "method:", &mode.code().to_string());

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.has_screenshot(), egui::Button::new("Classify now"))
            .clicked()
        {
            app.request_classification();
        }
        if ui.button("Full range").clicked() {
            app.picker.picked = None;
            app.picker.picked_at = None;
            app.picker.set_full_range();
            app.schedule_classification();
        }
    });

    let has_result = app.picker.classification.get().is_some();
    ui.add_enabled_ui(has_result, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Save overlay...").clicked() {
                save_file(app, SaveKind::Overlay);
            }
            if ui.button("Save composite...").clicked() {
                save_file(app, SaveKind::Composite);
            }
        });
    });
}
