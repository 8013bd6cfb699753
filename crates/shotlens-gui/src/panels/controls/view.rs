use crate::app::ShotlensApp;
use crate::panels::helpers::section_header;

pub(super) fn view_section(ui: &mut egui::Ui, app: &mut ShotlensApp) {
    let zoom = app
        .has_screenshot()
        .then(|| format!("{}%", app.viewport.engine.zoom_percent()));
    section_header(ui, "View", zoom.as_deref());
    ui.add_space(4.0);

    ui.add_enabled_ui(app.has_screenshot(), |ui| {
        ui.horizontal(|ui| {
            if ui.button("-").on_hover_text("Zoom out").clicked() {
                app.viewport.engine.zoom_out();
            }
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                app.viewport.engine.zoom_in();
            }
            if ui.button("Fit").on_hover_text("Fit to window").clicked() {
                app.viewport.engine.zoom_reset();
            }
        });
        ui.checkbox(&mut app.viewport.show_overlay, "Show match overlay");
    });
    ui.small("Scroll to zoom. Hold space and drag, or middle-drag, to pan.");
}
