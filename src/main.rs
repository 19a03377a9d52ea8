//! Othello GUI
//!
//! A graphical interface for playing Othello against the AI. Engine
//! settings are read from `othello.toml` in the working directory when present.

use std::path::Path;

use othello::ui::OthelloApp;
use othello::EngineConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "othello.toml";

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::load_or_default(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
        error!(error = %e, "invalid config, using defaults");
        EngineConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, &config)))),
    )
}
