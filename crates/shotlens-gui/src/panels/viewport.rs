use shotlens_core::geometry::{Size, Vec2};
use shotlens_core::viewport::{CursorHint, Handled, InputEvent, ZoomDirection};
use tracing::warn;

use crate::app::ShotlensApp;
use crate::panels::tool_interaction;
use crate::states::ToolKind;

pub fn show(ctx: &egui::Context, app: &mut ShotlensApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let Some(texture_id) = app.viewport.texture.as_ref().map(|t| t.id()) else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let container = Size::new(rect.width(), rect.height());
        ensure_fitted(app, container);
        app.viewport.engine.set_container_size(container);

        for event in collect_events(ctx, ui, &response, rect, app) {
            let handled = app
                .viewport
                .controller
                .handle(event, &mut app.viewport.engine);
            if handled == Handled::Passthrough {
                tool_interaction::handle(ctx, app, event);
            }
        }
        handle_zoom(ui, &response, rect, app);
        update_hover(ui, rect, app);
        update_cursor(ctx, &response, app);

        let painter = ui.painter_at(rect);
        if let Some(display) = app.viewport.engine.display_rect() {
            let img_rect = egui::Rect::from_min_max(
                to_screen(rect, display.min),
                to_screen(rect, display.max),
            );
            draw_image(&painter, texture_id, img_rect);
            if app.viewport.show_overlay {
                if let Some(overlay) = app.viewport.overlay_texture.as_ref() {
                    draw_image(&painter, overlay.id(), img_rect);
                }
            }
        }
        tool_interaction::draw(&painter, app, rect);

        if let Some(label) = app.ui_state.source_label.as_deref() {
            draw_viewing_label(&painter, rect, label);
        }
    });
}

/// Container-relative position to absolute screen position.
pub(crate) fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

fn to_local(rect: egui::Rect, p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn ensure_fitted(app: &mut ShotlensApp, container: Size) {
    if !app.viewport.needs_fit {
        return;
    }
    app.viewport.needs_fit = false;

    let Some([w, h]) = app.viewport.image_size() else {
        return;
    };
    let padding = app.config.viewport.container_padding;
    if let Err(e) = app.viewport.engine.initialize_image(
        Size::new(w as f32, h as f32),
        container,
        padding,
    ) {
        warn!(%e, "could not fit screenshot");
        app.ui_state.add_log(format!("Could not fit screenshot: {e}"));
    }
}

/// Translate this frame's raw egui input into viewport input events.
fn collect_events(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    app: &mut ShotlensApp,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if !ctx.wants_keyboard_input() {
        ui.input(|i| {
            for event in &i.events {
                if let egui::Event::Key {
                    key: egui::Key::Space,
                    pressed,
                    repeat,
                    ..
                } = event
                {
                    events.push(if *pressed {
                        InputEvent::SpaceDown { repeat: *repeat }
                    } else {
                        InputEvent::SpaceUp
                    });
                }
            }
        });
    }

    let inside = response.contains_pointer();
    let any_down = ui.input(|i| {
        if let Some(pos) = i.pointer.latest_pos().map(|p| to_local(rect, p)) {
            if inside && i.pointer.button_pressed(egui::PointerButton::Middle) {
                events.push(InputEvent::MiddleDown(pos));
            }
            if inside && i.pointer.button_pressed(egui::PointerButton::Primary) {
                events.push(InputEvent::PrimaryDown(pos));
            }
            if i.pointer.delta() != egui::Vec2::ZERO {
                events.push(InputEvent::PointerMove(pos));
            }
        }
        if i.pointer.any_released() {
            events.push(InputEvent::ButtonUp);
        }
        i.pointer.any_down()
    });

    if app.viewport.pointer_inside && !inside && !any_down {
        events.push(InputEvent::PointerLeave);
    }
    app.viewport.pointer_inside = inside;

    events
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, rect: egui::Rect, app: &mut ShotlensApp) {
    if !response.hovered() {
        return;
    }
    let (scroll_y, hover) = ui.input(|i| (i.raw_scroll_delta.y, i.pointer.hover_pos()));
    // egui reports wheel-up as positive; from_wheel_delta expects wheel-down positive.
    if let (Some(direction), Some(pos)) = (ZoomDirection::from_wheel_delta(-scroll_y), hover) {
        app.viewport
            .engine
            .zoom_at_point(to_local(rect, pos), direction);
    }
}

/// Image pixel under the pointer, if the pointer is over the drawn image.
fn update_hover(ui: &egui::Ui, rect: egui::Rect, app: &mut ShotlensApp) {
    let engine = &app.viewport.engine;
    app.viewport.hover_pixel = ui
        .input(|i| i.pointer.hover_pos())
        .map(|p| to_local(rect, p))
        .filter(|&p| engine.display_rect().is_some_and(|d| d.contains(p)))
        .zip(engine.image_size())
        .map(|(p, size)| {
            let img = engine.to_image_space(p);
            // The far edge is inside the rect but past the last pixel.
            let x = (img.x.floor() as i64).min(size.width as i64 - 1);
            let y = (img.y.floor() as i64).min(size.height as i64 - 1);
            (x, y)
        });
}

fn update_cursor(ctx: &egui::Context, response: &egui::Response, app: &ShotlensApp) {
    let icon = match app.viewport.engine.cursor_hint() {
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
        CursorHint::Grab => egui::CursorIcon::Grab,
        CursorHint::Default if response.hovered() => match app.tools.active {
            ToolKind::ColorPick | ToolKind::Delta => egui::CursorIcon::Crosshair,
            ToolKind::Roi | ToolKind::RoiOffset | ToolKind::Template => egui::CursorIcon::Cell,
        },
        CursorHint::Default => return,
    };
    ctx.set_cursor_icon(icon);
}

fn draw_image(painter: &egui::Painter, texture_id: egui::TextureId, img_rect: egui::Rect) {
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(painter: &egui::Painter, rect: egui::Rect, label: &str) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    painter.text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open or paste a screenshot to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
