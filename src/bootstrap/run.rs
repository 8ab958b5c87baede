use std::time::Duration;

use anyhow::Context;
use cs_core::ports::AppDirsPort;
use cs_infra::settings::FileSettingsRepository;
use cs_platform::app_dirs::DirsAppDirsAdapter;
use tracing::{error, info, warn};

use super::config::load_settings;
use super::tracing::init_tracing_subscriber;
use super::wiring::{build_app, system_clipboard, wire_dependencies};

/// Runs the headless engine until Ctrl-C.
///
/// Store initialization failure is fatal; everything after startup only
/// logs.
pub async fn run() -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("resolve application directories failed")?;

    if let Err(err) = init_tracing_subscriber(&app_dirs.logs_dir()) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }
    info!(data_root = %app_dirs.app_data_root.display(), "clipstash starting");

    let settings = load_settings(&FileSettingsRepository::new(app_dirs.settings_path())).await;

    let clipboard = system_clipboard()?;
    let deps = wire_dependencies(&app_dirs, clipboard).inspect_err(|err| {
        error!(error = %err, "failed to open history store");
    })?;
    let app = build_app(deps, &settings)?;
    info!(
        poll_interval_ms = settings.monitor.poll_interval_ms,
        "clipboard monitor running"
    );

    let periodic = settings
        .retention
        .periodic_interval_secs
        .filter(|secs| *secs > 0)
        .map(|secs| app.spawn_periodic_retention(Duration::from_secs(secs)));

    tokio::signal::ctrl_c()
        .await
        .context("listen for shutdown signal failed")?;
    info!("shutdown requested");

    if let Some(handle) = periodic {
        handle.abort();
    }

    match app.shutdown().await {
        Ok(action) => info!(?action, "clipstash stopped"),
        Err(err) => warn!(error = %err, "shutdown retention failed"),
    }

    Ok(())
}
