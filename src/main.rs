mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use eframe::egui;

use app::ExplorerApp;
use state::AppState;

/// The landings export read once at startup. A missing or malformed file is
/// fatal: there is no meaningful dashboard state without it.
const DATA_FILE: &str = "Meteorite_Landings.csv";

fn main() -> Result<()> {
    env_logger::init();

    let (dataset, total_records) = data::loader::load_file(Path::new(DATA_FILE))
        .with_context(|| format!("loading {DATA_FILE}"))?;
    log::info!("Loaded {total_records} meteorite records from {DATA_FILE}");

    let state = AppState::new(dataset, total_records);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Meteorite Landings Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))
}
