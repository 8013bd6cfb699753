use crate::app::ShotlensApp;

/// Dialog for pasting a base64 screenshot or data URI.
pub fn show(ctx: &egui::Context, app: &mut ShotlensApp) {
    let mut open = true;
    let mut decode = false;

    egui::Window::new("Paste Screenshot")
        .open(&mut open)
        .collapsible(false)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.small("Base64 PNG/JPEG, optionally as data:image/...;base64,...");
            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut app.ui_state.paste_buffer)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY)
                        .code_editor(),
                );
            });
            ui.horizontal(|ui| {
                let has_text = !app.ui_state.paste_buffer.trim().is_empty();
                if ui.add_enabled(has_text, egui::Button::new("Decode")).clicked() {
                    decode = true;
                }
                if ui.button("Clear").clicked() {
                    app.ui_state.paste_buffer.clear();
                }
            });
        });

    if decode {
        let text = std::mem::take(&mut app.ui_state.paste_buffer);
        app.request_decode(text);
        open = false;
    }
    app.ui_state.show_paste_dialog = open;
}
