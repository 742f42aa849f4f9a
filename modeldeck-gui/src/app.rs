//! Main application state and update loop.

use anyhow::Context as _;
use eframe::egui;
use tracing::{error, info, warn};

use modeldeck_core::{render_commands, Profile, ProfileStore, Shell};

use crate::ui;

// =============================================================================
// Theme
// =============================================================================

/// App theme. Applied at runtime only, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark theme (easier on the eyes)
    #[default]
    Dark,
    /// Light theme
    Light,
}

// =============================================================================
// Editor State
// =============================================================================

/// What the profile editor dialog is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Dialog closed.
    Closed,
    /// Creating a new profile.
    Add,
    /// Editing the named profile (name as it was before any rename).
    Edit(String),
}

/// Form state for the add/edit dialog.
#[derive(Debug, Default)]
pub struct EditorForm {
    pub name: String,
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    /// Validation error shown inline, if any.
    pub error: Option<String>,
}

impl EditorForm {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            base_url: profile.base_url.clone(),
            model: profile.model.clone(),
            api_key: profile.api_key.clone(),
            error: None,
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Main application state.
pub struct ModelDeckApp {
    /// The profile store; owns the config file.
    pub store: ProfileStore,

    /// Name of the profile selected in the table.
    pub selected: Option<String>,

    // -------------------------------------------------------------------------
    // Dialog State
    // -------------------------------------------------------------------------
    /// Editor dialog mode.
    pub editor_mode: EditorMode,

    /// Editor form fields.
    pub editor: EditorForm,

    /// Profile name awaiting delete confirmation.
    pub pending_delete: Option<String>,

    /// Show the environment-commands dialog.
    pub show_env_commands: bool,

    // -------------------------------------------------------------------------
    // UI State
    // -------------------------------------------------------------------------
    /// UI theme.
    pub theme: Theme,

    /// Status message.
    pub status_message: Option<(String, chrono::DateTime<chrono::Utc>)>,
}

impl ModelDeckApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing ModelDeckApp");

        // Open the profile store
        let store = match ProfileStore::open() {
            Ok(store) => store,
            Err(e) => {
                error!("Failed to open profile store: {}", e);
                // Fall back to a throwaway store in the temp dir
                let fallback = std::env::temp_dir().join("modeldeck").join("config.json");
                ProfileStore::open_at(fallback).expect("Failed to open fallback profile store")
            }
        };
        info!(path = %store.path().display(), profiles = store.len(), "Profile store ready");

        // Apply theme
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        // Configure spacing for better readability
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        cc.egui_ctx.set_style(style);

        Self {
            store,
            selected: None,
            editor_mode: EditorMode::Closed,
            editor: EditorForm::default(),
            pending_delete: None,
            show_env_commands: false,
            theme: Theme::default(),
            status_message: None,
        }
    }

    // -------------------------------------------------------------------------
    // Editor actions
    // -------------------------------------------------------------------------

    /// Open the editor dialog for a new profile.
    pub fn open_add_editor(&mut self) {
        self.editor = EditorForm::default();
        self.editor_mode = EditorMode::Add;
    }

    /// Open the editor dialog pre-filled with the named profile.
    pub fn open_edit_editor(&mut self, name: &str) {
        if let Some(profile) = self.store.get(name) {
            self.editor = EditorForm::from_profile(profile);
            self.editor_mode = EditorMode::Edit(name.to_string());
        }
    }

    /// Validate the form and create or replace the profile.
    ///
    /// Validation and store errors stay in the dialog; the dialog only
    /// closes on success.
    pub fn submit_editor(&mut self) {
        let profile = match Profile::new(
            &self.editor.name,
            &self.editor.base_url,
            &self.editor.model,
            &self.editor.api_key,
        ) {
            Ok(profile) => profile,
            Err(e) => {
                self.editor.error = Some(e.to_string());
                return;
            }
        };

        let result = match self.editor_mode.clone() {
            EditorMode::Add => self.store.add(profile.clone()),
            EditorMode::Edit(original) => self.store.update(&original, profile.clone()),
            EditorMode::Closed => return,
        };

        match result {
            Ok(()) => {
                info!(profile = %profile.name, "Profile saved");
                self.selected = Some(profile.name.clone());
                self.set_status(&format!("Saved profile '{}'", profile.name));
                self.editor_mode = EditorMode::Closed;
            }
            Err(e) => {
                warn!(error = %e, "Failed to save profile");
                self.editor.error = Some(e.to_string());
            }
        }
    }

    /// Close the editor dialog, discarding the form.
    pub fn close_editor(&mut self) {
        self.editor_mode = EditorMode::Closed;
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Ask for confirmation before deleting the named profile.
    pub fn request_delete(&mut self, name: &str) {
        self.pending_delete = Some(name.to_string());
    }

    /// Perform the pending delete.
    pub fn confirm_delete(&mut self) {
        let Some(name) = self.pending_delete.take() else {
            return;
        };

        match self.store.remove(&name) {
            Ok(_) => {
                info!(profile = %name, "Profile deleted");
                if self.selected.as_deref() == Some(name.as_str()) {
                    self.selected = None;
                }
                self.set_status(&format!("Deleted profile '{}'", name));
            }
            Err(e) => {
                error!(error = %e, profile = %name, "Failed to delete profile");
                self.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Cancel the pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // -------------------------------------------------------------------------
    // Activation / environment commands
    // -------------------------------------------------------------------------

    /// Mark the named profile as active.
    pub fn activate(&mut self, name: &str) {
        match self.store.set_current(name) {
            Ok(()) => {
                info!(profile = %name, "Profile activated");
                self.set_status(&format!("'{}' is now the active profile", name));
            }
            Err(e) => {
                error!(error = %e, profile = %name, "Failed to activate profile");
                self.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Assignment lines for the active profile, platform flavored.
    pub fn env_commands(&self) -> Vec<String> {
        self.store
            .current_profile()
            .map(|profile| render_commands(profile, Shell::current()))
            .unwrap_or_default()
    }

    /// Copy the assignment lines to the clipboard.
    pub fn copy_env_commands(&mut self, ctx: &egui::Context) {
        let commands = self.env_commands();
        if commands.is_empty() {
            return;
        }
        ctx.output_mut(|o| o.copied_text = commands.join("\n"));
        self.set_status("Commands copied to clipboard");
    }

    // -------------------------------------------------------------------------
    // Import / Export
    // -------------------------------------------------------------------------

    /// Pick a JSON file and replace the registry with its contents.
    pub fn import_profiles(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let result = self
            .store
            .import_from(&path)
            .with_context(|| format!("importing {}", path.display()));

        match result {
            Ok(count) => {
                info!(path = %path.display(), profiles = count, "Imported profiles");
                self.selected = None;
                self.set_status(&format!("Imported {} profiles", count));
            }
            Err(e) => {
                error!("Import failed: {:#}", e);
                self.set_status(&format!("Import failed: {:#}", e));
            }
        }
    }

    /// Pick a destination and write a registry snapshot there.
    pub fn export_profiles(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("claude_models.json")
            .save_file()
        else {
            return;
        };

        let result = self
            .store
            .export_to(&path)
            .with_context(|| format!("exporting to {}", path.display()));

        match result {
            Ok(()) => {
                info!(path = %path.display(), "Exported profiles");
                self.set_status(&format!("Exported to {}", path.display()));
            }
            Err(e) => {
                error!("Export failed: {:#}", e);
                self.set_status(&format!("Export failed: {:#}", e));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Theme / status
    // -------------------------------------------------------------------------

    /// Apply the current theme to the egui context.
    pub fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    /// Set a status message.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), chrono::Utc::now()));
    }

    /// Clear old status messages.
    pub fn clear_old_status(&mut self) {
        if let Some((_, time)) = &self.status_message {
            if chrono::Utc::now() - *time > chrono::Duration::seconds(5) {
                self.status_message = None;
            }
        }
    }
}

impl eframe::App for ModelDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clear_old_status();

        // Top panel with menu
        egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
            ui::menu::render(self, ui, ctx);
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_panel")
            .max_height(24.0)
            .show(ctx, |ui| {
                ui::status::render(self, ui);
            });

        // Dialogs
        if self.editor_mode != EditorMode::Closed {
            ui::editor::render(self, ctx);
        }
        if self.pending_delete.is_some() {
            ui::editor::render_delete_confirm(self, ctx);
        }
        if self.show_env_commands {
            ui::env_dialog::render(self, ctx);
        }

        // Profile table (fills remaining space)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::profile_list::render(self, ui);
        });
    }
}
