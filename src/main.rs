// src/main.rs
use std::sync::{Arc, OnceLock};
use eframe::egui;
use anyhow::Result;
use tracing::info;

mod api;
mod app;
mod config;
mod report;
mod state;
mod ui;
mod worker;

use api::HttpApi;
use app::DashboardApp;
use config::Settings;
use worker::Worker;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let settings = Settings::load()?;
    info!(origin = %settings.api_origin, "starting dashboard");

    // The worker exists before the window, so repaint requests wait for the context
    let repaint: Arc<OnceLock<egui::Context>> = Arc::new(OnceLock::new());
    let notify = {
        let repaint = Arc::clone(&repaint);
        move || {
            if let Some(ctx) = repaint.get() {
                ctx.request_repaint();
            }
        }
    };
    let worker = Worker::spawn(HttpApi::new(&settings)?, settings.download_dir(), notify)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 850.0])
            .with_title("Equipment Analytics Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Equipment Analytics Dashboard",
        options,
        Box::new(move |cc| {
            let _ = repaint.set(cc.egui_ctx.clone());
            Box::new(DashboardApp::new(worker))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
