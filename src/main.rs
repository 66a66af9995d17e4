// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod format;
mod state;
mod ui;

use app::VigilApp;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vigil_gui=info")),
        )
        .init();

    let base_url =
        std::env::var("VIGIL_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
    tracing::info!(%base_url, "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Vigil"),
        ..Default::default()
    };

    eframe::run_native(
        "Vigil",
        options,
        Box::new(move |cc| Box::new(VigilApp::new(cc, base_url))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
