//! ModelDeck GUI Application
//!
//! A desktop manager for Claude API endpoint profiles: create named
//! profiles, pick the active one, and copy the environment-variable
//! commands that switch your terminal over to it.

mod app;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("modeldeck_core=debug".parse().unwrap())
                .add_directive("modeldeck_gui=debug".parse().unwrap())
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting ModelDeck v{}", modeldeck_core::VERSION);

    // Window configuration
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([720.0, 420.0])
            .with_title("ModelDeck - Claude Model Profiles"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ModelDeck",
        options,
        Box::new(|cc| Ok(Box::new(app::ModelDeckApp::new(cc)))),
    )
}
