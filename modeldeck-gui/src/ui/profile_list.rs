//! Central profile table and action buttons.

use eframe::egui::{self, RichText, Rounding, Vec2};

use crate::app::ModelDeckApp;
use crate::ui::colors;

/// One row's display data, snapshotted so the table doesn't borrow the store.
struct Row {
    name: String,
    base_url: String,
    model: String,
    key_preview: Option<String>,
    is_active: bool,
}

/// Render the profile table.
pub fn render(app: &mut ModelDeckApp, ui: &mut egui::Ui) {
    let muted = colors::muted(ui.visuals());

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.heading("Model Profiles");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match app.store.current_name() {
                Some(name) => {
                    ui.label(RichText::new(format!("Active: {}", name)).color(colors::SUCCESS));
                }
                None => {
                    ui.label(RichText::new("No active profile").color(muted));
                }
            }
        });
    });
    ui.separator();

    if app.store.is_empty() {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No profiles yet.").size(16.0).color(muted));
            ui.label(
                RichText::new("Add a profile to start switching models.")
                    .size(12.0)
                    .color(muted),
            );
            ui.add_space(12.0);
            if ui
                .add_sized(
                    Vec2::new(140.0, 32.0),
                    egui::Button::new(RichText::new("Add Profile").strong())
                        .fill(colors::ACCENT)
                        .rounding(Rounding::same(8.0)),
                )
                .clicked()
            {
                app.open_add_editor();
            }
        });
        return;
    }

    let rows: Vec<Row> = app
        .store
        .profiles()
        .iter()
        .map(|profile| Row {
            name: profile.name.clone(),
            base_url: profile.base_url.clone(),
            model: profile.model.clone(),
            key_preview: profile.has_api_key().then(|| profile.api_key_preview()),
            is_active: app.store.current_name() == Some(profile.name.as_str()),
        })
        .collect();

    let mut clicked: Option<String> = None;
    let mut double_clicked: Option<String> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("profile_table")
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                // Header
                ui.label(RichText::new("Name").strong());
                ui.label(RichText::new("Base URL").strong());
                ui.label(RichText::new("Model").strong());
                ui.label(RichText::new("API Key").strong());
                ui.label("");
                ui.end_row();

                for row in &rows {
                    let selected = app.selected.as_deref() == Some(row.name.as_str());
                    let response = ui.selectable_label(selected, &row.name);
                    if response.clicked() {
                        clicked = Some(row.name.clone());
                    }
                    if response.double_clicked() {
                        double_clicked = Some(row.name.clone());
                    }

                    ui.label(&row.base_url);
                    ui.label(&row.model);
                    match &row.key_preview {
                        Some(preview) => {
                            ui.label(RichText::new(preview).monospace());
                        }
                        None => {
                            ui.label(RichText::new("not set").color(muted));
                        }
                    }
                    if row.is_active {
                        ui.label(RichText::new("● active").color(colors::SUCCESS));
                    } else {
                        ui.label("");
                    }
                    ui.end_row();
                }
            });
    });

    if let Some(name) = clicked {
        app.selected = Some(name);
    }
    if let Some(name) = double_clicked {
        app.open_edit_editor(&name);
    }

    ui.add_space(8.0);
    ui.separator();

    // Action buttons
    let selection = app.selected.clone();
    let has_selection = selection.is_some();
    let has_active = app.store.current_name().is_some();

    ui.horizontal(|ui| {
        if ui
            .add(
                egui::Button::new(RichText::new("Add").strong())
                    .fill(colors::ACCENT)
                    .rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            app.open_add_editor();
        }

        if ui
            .add_enabled(has_selection, egui::Button::new("Edit").rounding(Rounding::same(8.0)))
            .clicked()
        {
            if let Some(name) = &selection {
                app.open_edit_editor(name);
            }
        }

        if ui
            .add_enabled(
                has_selection,
                egui::Button::new(RichText::new("Delete").color(colors::ERROR))
                    .rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            if let Some(name) = &selection {
                app.request_delete(name);
            }
        }

        ui.separator();

        if ui
            .add_enabled(
                has_selection,
                egui::Button::new("Set Active").rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            if let Some(name) = &selection {
                app.activate(name);
            }
        }

        if ui
            .add_enabled(
                has_active,
                egui::Button::new("Environment Commands...").rounding(Rounding::same(8.0)),
            )
            .clicked()
        {
            app.show_env_commands = true;
        }
    });
}
