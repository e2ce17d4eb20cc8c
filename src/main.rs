mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::NtpDashApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // One-time blocking load before the UI starts; failure aborts startup.
    let (dataset, domains) =
        data::loader::load().context("failed to load the experiment dataset")?;
    log::info!(
        "Loaded {} experiment records ({} matrix categories, {} electrode shapes)",
        dataset.len(),
        domains.matrix_categories.len(),
        domains.electrode_shapes.len()
    );
    if dataset.is_empty() {
        log::warn!("dataset is empty; the chart will show no points");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset, domains);
    eframe::run_native(
        "Non-thermal plasma decontamination efficacy",
        options,
        Box::new(move |_cc| Ok(Box::new(NtpDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))
}
