//! Top menu bar.

use eframe::egui::{self, RichText};

use crate::app::{ModelDeckApp, Theme};
use crate::ui::colors;

/// Render the top menu bar.
pub fn render(app: &mut ModelDeckApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    let has_selection = app.selected.is_some();
    let active = app.store.current_name().map(String::from);

    egui::menu::bar(ui, |ui| {
        // App title/logo
        ui.label(RichText::new("ModelDeck").strong().size(15.0));
        ui.separator();

        // File menu
        ui.menu_button("File", |ui| {
            if ui.button("Import Profiles...").clicked() {
                app.import_profiles();
                ui.close_menu();
            }

            if ui.button("Export Profiles...").clicked() {
                app.export_profiles();
                ui.close_menu();
            }

            ui.separator();

            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        // Profile menu
        ui.menu_button("Profile", |ui| {
            if ui.button("Add...").clicked() {
                app.open_add_editor();
                ui.close_menu();
            }

            if ui
                .add_enabled(has_selection, egui::Button::new("Edit..."))
                .clicked()
            {
                if let Some(name) = app.selected.clone() {
                    app.open_edit_editor(&name);
                }
                ui.close_menu();
            }

            if ui
                .add_enabled(has_selection, egui::Button::new("Delete..."))
                .clicked()
            {
                if let Some(name) = app.selected.clone() {
                    app.request_delete(&name);
                }
                ui.close_menu();
            }

            ui.separator();

            if ui
                .add_enabled(has_selection, egui::Button::new("Set Active"))
                .clicked()
            {
                if let Some(name) = app.selected.clone() {
                    app.activate(&name);
                }
                ui.close_menu();
            }

            if ui
                .add_enabled(active.is_some(), egui::Button::new("Environment Commands..."))
                .clicked()
            {
                app.show_env_commands = true;
                ui.close_menu();
            }
        });

        // View menu
        ui.menu_button("View", |ui| {
            let mut dark_mode = app.theme == Theme::Dark;

            if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                app.theme = if dark_mode { Theme::Dark } else { Theme::Light };
                app.apply_theme(ctx);
            }
        });

        // Right-aligned active-profile indicator
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &active {
                Some(name) => {
                    ui.label(
                        RichText::new(format!("Active: {}", name))
                            .color(colors::SUCCESS)
                            .size(12.0),
                    );
                }
                None => {
                    ui.label(
                        RichText::new("No active profile")
                            .color(colors::muted(ui.visuals()))
                            .size(12.0),
                    );
                }
            }
        });
    });
}
