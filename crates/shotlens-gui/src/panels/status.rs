use crate::app::ShotlensApp;

pub fn show(ctx: &egui::Context, app: &mut ShotlensApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar
        if let Some(task) = app.ui_state.running {
            let (fraction, detail) = match (
                app.ui_state.progress_rows_done,
                app.ui_state.progress_rows_total,
            ) {
                (Some(done), Some(total)) if total > 0 => (
                    done as f32 / total as f32,
                    format!("{task} ({done}/{total} rows)"),
                ),
                _ => (0.0, format!("{task}...")),
            };

            ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
        } else {
            // Invisible placeholder, same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(size) = app.viewport.image_size() {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some((x, y)) = app.viewport.hover_pixel {
                ui.monospace(format!("({x}, {y})"));
                ui.separator();
            }
            ui.label(format!("Zoom: {}%", app.viewport.engine.zoom_percent()));
            ui.separator();
            ui.label(format!("Mode: {}", app.picker.mode));
            if let Some(summary) = app.picker.match_summary() {
                ui.separator();
                ui.label(format!("Match: {summary}"));
            }
        });

        ui.add_space(2.0);
    });
}
