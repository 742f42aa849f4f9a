//! Status bar at the bottom of the window.

use eframe::egui::{self, RichText};

use crate::app::ModelDeckApp;
use crate::ui::colors;

/// Render the status bar.
pub fn render(app: &ModelDeckApp, ui: &mut egui::Ui) {
    let muted = colors::muted(ui.visuals());

    ui.horizontal(|ui| {
        // Status message
        if let Some((msg, _)) = &app.status_message {
            ui.label(RichText::new(msg).size(11.0).color(muted));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Profile count
            let count = app.store.len();
            if count > 0 {
                ui.label(
                    RichText::new(format!("{} profiles", count))
                        .size(11.0)
                        .color(muted),
                );
                ui.separator();
            }

            // Config file location, truncated to the trailing 47 chars
            let path_str = app.store.path().to_string_lossy();
            let display_path = if path_str.chars().count() > 50 {
                let start = path_str
                    .char_indices()
                    .nth_back(46)
                    .map(|(idx, _)| idx)
                    .unwrap_or(0);
                format!("...{}", &path_str[start..])
            } else {
                path_str.to_string()
            };
            ui.label(
                RichText::new(format!("📁 {}", display_path))
                    .size(11.0)
                    .color(muted),
            );
        });
    });
}
