use shotlens_core::geometry::Vec2;
use shotlens_core::viewport::{DeltaMode, Roi};

use crate::app::ShotlensApp;
use crate::messages::SaveKind;
use crate::panels::helpers::{copy_row, enum_combo, section_header};
use crate::panels::menu_bar::save_file;
use crate::states::{OffsetSlot, ToolKind};

pub(super) fn tools_section(ui: &mut egui::Ui, app: &mut ShotlensApp) {
    section_header(ui, "Tools", None);
    ui.add_space(4.0);

    if enum_combo(ui, "Tool", &mut app.tools.active, ToolKind::ALL) {
        app.tools.drag = None;
        app.tools.delta_dragging = false;
    }
    ui.add_space(4.0);

    let image = app.viewport.image_size();
    match app.tools.active {
        ToolKind::ColorPick => color_pick_info(ui, app),
        ToolKind::Roi => {
            ui.small("Drag a rectangle over the screenshot.");
            match app.tools.roi.as_mut() {
                Some(roi) => {
                    roi_editor(ui, "roi", roi, image);
                    copy_row(ui, "roi:", &roi.to_string());
                }
                None => {
                    ui.weak("No region selected");
                }
            }
        }
        ToolKind::Delta => delta_info(ui, app),
        ToolKind::RoiOffset => offset_info(ui, app, image),
        ToolKind::Template => template_info(ui, app, image),
    }

    if ui.button("Clear").clicked() {
        app.tools.clear();
    }
}

/// Whole-pixel x/y/w/h fields for a selected rectangle.
fn roi_editor(ui: &mut egui::Ui, id: &str, roi: &mut Roi, image: Option<[usize; 2]>) {
    let [max_w, max_h] = image.map_or([i32::MAX; 2], |[w, h]| [w as i32, h as i32]);
    egui::Grid::new(id).num_columns(4).show(ui, |ui| {
        ui.label("x");
        ui.add(egui::DragValue::new(&mut roi.x).range(0..=max_w - 1));
        ui.label("y");
        ui.add(egui::DragValue::new(&mut roi.y).range(0..=max_h - 1));
        ui.end_row();
        // Width and height stop at the image edge.
        ui.label("w");
        ui.add(egui::DragValue::new(&mut roi.width).range(1..=(max_w - roi.x).max(1)));
        ui.label("h");
        ui.add(egui::DragValue::new(&mut roi.height).range(1..=(max_h - roi.y).max(1)));
        ui.end_row();
    });
}

fn point_editor(ui: &mut egui::Ui, label: &str, p: &mut Vec2) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(&mut p.x).speed(1.0).max_decimals(0).prefix("x "));
        ui.add(egui::DragValue::new(&mut p.y).speed(1.0).max_decimals(0).prefix("y "));
    });
}

fn color_pick_info(ui: &mut egui::Ui, app: &ShotlensApp) {
    ui.small("Click a pixel to pick its color.");
    let Some(picked) = &app.picker.picked else {
        ui.weak("No color picked");
        return;
    };

    ui.horizontal(|ui| {
        let [r, g, b] = picked.rgb;
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(swatch, 2.0, egui::Color32::from_rgb(r, g, b));
        ui.label(picked.display.as_str());
    });
    if let Some((x, y)) = app.picker.picked_at {
        ui.small(format!("at ({x}, {y})"));
    }
    copy_row(ui, "value:", &picked.value_literal());
    copy_row(ui, "field:", &picked.key_value_literal());
}

fn delta_info(ui: &mut egui::Ui, app: &mut ShotlensApp) {
    ui.horizontal(|ui| {
        ui.radio_value(&mut app.tools.delta_mode, DeltaMode::Dx, "dx");
        ui.radio_value(&mut app.tools.delta_mode, DeltaMode::Dy, "dy");
    });
    ui.small("Drag from the start point to the end point.");

    if let Some((start, end)) = app.tools.delta_points.as_mut() {
        point_editor(ui, "start", start);
        point_editor(ui, "end", end);
    }
    match app.tools.delta() {
        Some(delta) => copy_row(
            ui,
            &format!("{}:", app.tools.delta_mode),
            &delta.to_string(),
        ),
        None => {
            ui.weak("No measurement");
        }
    }
}

fn offset_info(ui: &mut egui::Ui, app: &mut ShotlensApp, image: Option<[usize; 2]>) {
    ui.horizontal(|ui| {
        ui.label("Drawing:");
        ui.radio_value(&mut app.tools.offset_slot, OffsetSlot::Source, "Source");
        ui.radio_value(&mut app.tools.offset_slot, OffsetSlot::Target, "Target");
    });

    for (label, roi) in [
        ("source:", &mut app.tools.offset_source),
        ("target:", &mut app.tools.offset_target),
    ] {
        match roi.as_mut() {
            Some(roi) => {
                roi_editor(ui, label, roi, image);
                copy_row(ui, label, &roi.to_string());
            }
            None => {
                ui.horizontal(|ui| {
                    ui.label(label);
                    ui.weak("not drawn");
                });
            }
        }
    }

    if let Some([dx, dy, dw, dh]) = app.tools.offset() {
        copy_row(
            ui,
            "roi_offset:",
            &format!("[{dx}, {dy}, {dw}, {dh}]"),
        );
    }
}

fn template_info(ui: &mut egui::Ui, app: &mut ShotlensApp, image: Option<[usize; 2]>) {
    ui.small("Drag the region to save as a match template.");
    let has_mask = app.picker.classification.get().is_some();
    ui.add_enabled(
        has_mask,
        egui::Checkbox::new(&mut app.tools.template_with_mask, "Include match mask"),
    );

    let Some(roi) = app.tools.template.as_mut() else {
        ui.weak("No template region");
        return;
    };
    roi_editor(ui, "template", roi, image);
    let roi = *roi;
    copy_row(ui, "roi:", &roi.to_string());

    if ui.button("Save template...").clicked() {
        let with_mask = app.tools.template_with_mask && has_mask;
        ui.ctx().copy_text(roi.to_string());
        app.ui_state
            .add_log(format!("Template roi {roi} (copied)"));
        save_file(app, SaveKind::Template { roi, with_mask });
    }
}
