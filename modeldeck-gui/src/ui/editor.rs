//! Add/edit profile dialog and the delete confirmation.

use eframe::egui::{self, RichText, Rounding, Vec2};

use crate::app::{EditorMode, ModelDeckApp};
use crate::ui::colors;

/// Render the add/edit dialog.
pub fn render(app: &mut ModelDeckApp, ctx: &egui::Context) {
    let title = match &app.editor_mode {
        EditorMode::Add => "Add Profile",
        EditorMode::Edit(_) => "Edit Profile",
        EditorMode::Closed => return,
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(440.0)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            let muted = colors::muted(ui.visuals());

            ui.spacing_mut().item_spacing = Vec2::new(8.0, 10.0);

            egui::Grid::new("editor_form")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.editor.name)
                            .hint_text("e.g. anthropic-official")
                            .desired_width(300.0),
                    );
                    ui.end_row();

                    ui.label("Base URL");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.editor.base_url)
                            .hint_text("https://api.anthropic.com")
                            .desired_width(300.0),
                    );
                    ui.end_row();

                    ui.label("Model");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.editor.model)
                            .hint_text("claude-sonnet-4-20250514")
                            .desired_width(300.0),
                    );
                    ui.end_row();

                    ui.label("API Key");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.editor.api_key)
                            .password(true)
                            .hint_text("optional")
                            .desired_width(300.0),
                    );
                    ui.end_row();
                });

            ui.label(
                RichText::new("The key is stored unencrypted in the config file.")
                    .size(11.0)
                    .color(muted)
                    .italics(),
            );

            // Inline validation error
            if let Some(error) = &app.editor.error {
                ui.label(RichText::new(error).color(colors::ERROR).size(12.0));
            }

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_sized(
                        Vec2::new(100.0, 30.0),
                        egui::Button::new(RichText::new("Save").strong())
                            .fill(colors::ACCENT)
                            .rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    app.submit_editor();
                }

                if ui
                    .add_sized(
                        Vec2::new(100.0, 30.0),
                        egui::Button::new("Cancel").rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    app.close_editor();
                }
            });
        });
}

/// Render the delete confirmation dialog.
pub fn render_delete_confirm(app: &mut ModelDeckApp, ctx: &egui::Context) {
    let Some(name) = app.pending_delete.clone() else {
        return;
    };

    egui::Window::new("Delete Profile")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!("Delete profile '{}'? This cannot be undone.", name));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add_sized(
                        Vec2::new(100.0, 30.0),
                        egui::Button::new(RichText::new("Delete").strong())
                            .fill(colors::ERROR)
                            .rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    app.confirm_delete();
                }

                if ui
                    .add_sized(
                        Vec2::new(100.0, 30.0),
                        egui::Button::new("Cancel").rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    app.cancel_delete();
                }
            });
        });
}
