//! Environment-commands dialog for the active profile.

use eframe::egui::{self, RichText, Rounding, Vec2};

use crate::app::ModelDeckApp;
use crate::ui::colors;

/// Render the environment-commands dialog.
pub fn render(app: &mut ModelDeckApp, ctx: &egui::Context) {
    let commands = app.env_commands();

    egui::Window::new("Environment Commands")
        .collapsible(false)
        .resizable(false)
        .default_width(560.0)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            let muted = colors::muted(ui.visuals());

            if commands.is_empty() {
                // The active profile vanished while the dialog was open
                ui.label(RichText::new("No active profile.").color(muted));
            } else {
                ui.label("Copy and run these commands in your terminal:");

                // Read-only view; edits are discarded every frame
                let mut text = commands.join("\n");
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .desired_rows(commands.len().max(4)),
                );

                ui.label(
                    RichText::new("Only the shell you run them in picks the variables up.")
                        .size(11.0)
                        .color(muted)
                        .italics(),
                );
            }

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        !commands.is_empty(),
                        egui::Button::new(RichText::new("Copy").strong())
                            .fill(colors::ACCENT)
                            .rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    app.copy_env_commands(ctx);
                }

                if ui
                    .add(egui::Button::new("Close").rounding(Rounding::same(8.0)))
                    .clicked()
                {
                    app.show_env_commands = false;
                }
            });
        });
}
