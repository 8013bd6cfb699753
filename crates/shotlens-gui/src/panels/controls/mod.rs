mod color_range;
mod file;
mod tools;
mod view;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::ShotlensApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file::file_section(ui, app);
                ui.separator();
                view::view_section(ui, app);
                ui.separator();
                tools::tools_section(ui, app);
                ui.separator();
                color_range::color_range_section(ui, app);
            });
        });
}
