//! Gomoku GUI
//!
//! Two-player hotseat Gomoku on a 15x15 board.

use std::path::Path;

use gomoku::config::{AppConfig, CONFIG_FILE};
use gomoku::ui::GomokuApp;
use tracing::{error, info, Level};

fn main() -> Result<(), eframe::Error> {
    let loaded = AppConfig::load_or_default(Path::new(CONFIG_FILE));
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.level().unwrap_or(Level::INFO))
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a global tracing subscriber was already set");
    }

    if let Err(err) = &loaded {
        error!(%err, "invalid {CONFIG_FILE}, using defaults");
    }
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}
