use std::path::PathBuf;

mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{config, pages::APP_TITLE};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::reducer::GuiState;
use crate::ui::DesktopGuiApp;

#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./anecdotes.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    notification_ms: Option<u64>,
    /// Start without the two seeded anecdotes.
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings(),
    };
    if let Some(notification_ms) = args.notification_ms {
        settings.notification_ms = notification_ms;
    }
    if args.empty {
        settings.seed_anecdotes = false;
    }

    // Owns the notification dismissal timers for the lifetime of the window.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("anecdotes-timers")
        .enable_time()
        .build()
        .context("failed to build timer runtime")?;
    let timers = runtime.handle().clone();
    let state = GuiState::new(&settings, timers.clone())?;
    tracing::info!(
        notification_ms = settings.notification_ms,
        seeded = settings.seed_anecdotes,
        "starting desktop gui"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(DesktopGuiApp::new(
                state,
                &timers,
                cc.egui_ctx.clone(),
            )))
        }),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))?;

    Ok(())
}
