use shotlens_core::color::pick_at_screen;
use shotlens_core::geometry::Vec2;
use shotlens_core::viewport::{InputEvent, RectDrag, Roi};
use tracing::warn;

use crate::app::ShotlensApp;
use crate::panels::viewport::to_screen;
use crate::states::ToolKind;

const ROI_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);
const SOURCE_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 160, 255);
const TARGET_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 140, 0);
const DELTA_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);
const TEMPLATE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 220, 220);

/// Route an event the pan controller did not consume to the active tool.
pub fn handle(ctx: &egui::Context, app: &mut ShotlensApp, event: InputEvent) {
    match app.tools.active {
        ToolKind::ColorPick => {
            if let InputEvent::PrimaryDown(p) = event {
                pick(ctx, app, p);
            }
        }
        kind if kind.draws_rect() => rect_drag(ctx, app, event),
        ToolKind::Delta => delta_drag(ctx, app, event),
        _ => {}
    }
}

fn pick(ctx: &egui::Context, app: &mut ShotlensApp, screen: Vec2) {
    let Some(raster) = app.picker.classifier.raster().cloned() else {
        return;
    };
    let engine = &app.viewport.engine;
    match pick_at_screen(&raster, engine, screen, app.picker.mode) {
        Ok(picked) => {
            let img = engine.to_image_space(screen);
            let literal = picked.value_literal();
            ctx.copy_text(literal.clone());
            app.ui_state
                .add_log(format!("Picked {} (copied {literal})", picked.display));
            app.picker
                .apply_pick(picked, (img.x.floor() as i64, img.y.floor() as i64));
            app.schedule_classification();
        }
        Err(e) => {
            warn!(%e, "pick ignored");
            app.ui_state.add_log(format!("Pick ignored: {e}"));
        }
    }
}

fn rect_drag(ctx: &egui::Context, app: &mut ShotlensApp, event: InputEvent) {
    let engine = &app.viewport.engine;
    match event {
        InputEvent::PrimaryDown(p) => {
            app.tools.drag = Some(RectDrag::new(engine.to_image_space(p)));
        }
        InputEvent::PointerMove(p) => {
            if let Some(drag) = app.tools.drag.as_mut() {
                drag.update(engine.to_image_space(p));
            }
        }
        InputEvent::ButtonUp | InputEvent::PointerLeave => {
            let Some(drag) = app.tools.drag.take() else {
                return;
            };
            let roi = engine
                .image_size()
                .and_then(|size| drag.to_roi_clamped(size));
            match roi {
                Some(roi) => {
                    ctx.copy_text(roi.to_string());
                    app.ui_state.add_log(format!("ROI {roi} (copied)"));
                    app.tools.finish_rect(roi);
                    if let Some(offset) = app.tools.offset() {
                        app.ui_state.add_log(format!("roi_offset: {offset:?}"));
                    }
                }
                None => app.ui_state.add_log("Selection is outside the image".into()),
            }
        }
        _ => {}
    }
}

fn delta_drag(ctx: &egui::Context, app: &mut ShotlensApp, event: InputEvent) {
    let engine = &app.viewport.engine;
    match event {
        InputEvent::PrimaryDown(p) => {
            let img = engine.to_image_space(p);
            app.tools.delta_points = Some((img, img));
            app.tools.delta_dragging = true;
        }
        InputEvent::PointerMove(p) if app.tools.delta_dragging => {
            if let Some((_, end)) = app.tools.delta_points.as_mut() {
                *end = engine.to_image_space(p);
            }
        }
        InputEvent::ButtonUp | InputEvent::PointerLeave if app.tools.delta_dragging => {
            app.tools.delta_dragging = false;
            if let Some(delta) = app.tools.delta() {
                ctx.copy_text(delta.to_string());
                app.ui_state
                    .add_log(format!("{}: {delta} (copied)", app.tools.delta_mode));
            }
        }
        _ => {}
    }
}

/// Draw selections on top of the image.
pub fn draw(painter: &egui::Painter, app: &ShotlensApp, rect: egui::Rect) {
    let engine = &app.viewport.engine;
    let roi_rect = |roi: Roi| {
        let min = engine.to_screen_space(Vec2::new(roi.x as f32, roi.y as f32));
        let max = engine.to_screen_space(Vec2::new(
            (roi.x + roi.width) as f32,
            (roi.y + roi.height) as f32,
        ));
        egui::Rect::from_min_max(to_screen(rect, min), to_screen(rect, max))
    };

    match app.tools.active {
        ToolKind::Roi => {
            if let Some(roi) = app.tools.roi {
                outline(painter, roi_rect(roi), ROI_COLOR, &roi.to_string());
            }
        }
        ToolKind::RoiOffset => {
            if let Some(roi) = app.tools.offset_source {
                outline(painter, roi_rect(roi), SOURCE_COLOR, "source");
            }
            if let Some(roi) = app.tools.offset_target {
                outline(painter, roi_rect(roi), TARGET_COLOR, "target");
            }
        }
        ToolKind::Template => {
            if let Some(roi) = app.tools.template {
                outline(painter, roi_rect(roi), TEMPLATE_COLOR, "template");
            }
        }
        ToolKind::Delta => draw_delta(painter, app, rect),
        ToolKind::ColorPick => {
            if let Some((x, y)) = app.picker.picked_at {
                let center = engine.to_screen_space(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                painter.circle_stroke(
                    to_screen(rect, center),
                    6.0,
                    egui::Stroke::new(1.5, egui::Color32::WHITE),
                );
            }
        }
    }

    if let Some(drag) = app.tools.drag {
        let start = to_screen(rect, engine.to_screen_space(drag.start));
        let current = to_screen(rect, engine.to_screen_space(drag.current));
        painter.rect_stroke(
            egui::Rect::from_two_pos(start, current),
            0.0,
            egui::Stroke::new(1.0, ROI_COLOR),
            egui::epaint::StrokeKind::Outside,
        );
    }
}

fn outline(painter: &egui::Painter, r: egui::Rect, color: egui::Color32, label: &str) {
    painter.rect_stroke(
        r,
        0.0,
        egui::Stroke::new(1.5, color),
        egui::epaint::StrokeKind::Outside,
    );
    painter.text(
        egui::pos2(r.left(), r.bottom() + 4.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(12.0),
        color,
    );
}

fn draw_delta(painter: &egui::Painter, app: &ShotlensApp, rect: egui::Rect) {
    let Some((start, end)) = app.tools.delta_points else {
        return;
    };
    let engine = &app.viewport.engine;
    let a = to_screen(rect, engine.to_screen_space(start));
    let b = to_screen(rect, engine.to_screen_space(end));
    let stroke = egui::Stroke::new(1.5, DELTA_COLOR);

    painter.circle_stroke(a, 6.0, stroke);
    painter.circle_stroke(b, 6.0, stroke);
    painter.line_segment([a, b], egui::Stroke::new(1.0, DELTA_COLOR.gamma_multiply(0.5)));

    // The measured axis.
    let corner = match app.tools.delta_mode {
        shotlens_core::viewport::DeltaMode::Dx => egui::pos2(b.x, a.y),
        shotlens_core::viewport::DeltaMode::Dy => egui::pos2(a.x, b.y),
    };
    painter.line_segment([a, corner], stroke);

    if let Some(delta) = app.tools.delta() {
        painter.text(
            b + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{}: {delta}", app.tools.delta_mode),
            egui::FontId::proportional(12.0),
            DELTA_COLOR,
        );
    }
}
