use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{Context, Result};
use backend_bridge::{commands::BackendCommand, runtime};
use clap::Parser;
use client_core::{resolve_settings, PredictionClient};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{PredictorApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "predictor-gui", about = "Diabetes risk prediction desktop client")]
struct Args {
    /// Base URL of the prediction service, e.g. http://127.0.0.1:5000
    #[arg(long)]
    url: Option<String>,
    /// Explicit predictor.toml to load instead of the default locations.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = resolve_settings(args.config.as_deref(), args.url.as_deref())
        .context("failed to load predictor settings")?;
    let client =
        PredictionClient::from_settings(&settings).context("failed to build prediction client")?;
    let startup = StartupConfig {
        endpoint: client.endpoint().to_string(),
    };
    tracing::info!(endpoint = %startup.endpoint, "starting desktop client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    runtime::launch(client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Diabetes Prediction System")
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([520.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Diabetes Prediction System",
        options,
        Box::new(move |_cc| Ok(Box::new(PredictorApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop client exited with error: {err}"))
}
