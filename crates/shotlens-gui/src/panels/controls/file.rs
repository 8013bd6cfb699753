use crate::app::ShotlensApp;
use crate::panels::helpers::section_header;
use crate::panels::menu_bar::open_file;

pub(super) fn file_section(ui: &mut egui::Ui, app: &mut ShotlensApp) {
    section_header(ui, "Screenshot", None);
    ui.add_space(4.0);

    let busy = app.ui_state.is_busy();
    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Open...")).clicked() {
            open_file(ui.ctx(), app);
        }
        if ui
            .add_enabled(!busy, egui::Button::new("Paste Base64..."))
            .clicked()
        {
            app.ui_state.show_paste_dialog = true;
        }
        if ui
            .add_enabled(app.has_screenshot(), egui::Button::new("Close"))
            .clicked()
        {
            app.close_screenshot();
        }
    });

    if let Some(label) = &app.ui_state.source_label {
        ui.label(label.as_str());
    }
    if let Some([w, h]) = app.viewport.image_size() {
        ui.small(format!("{w}x{h}"));
    }
}
