//! Dependency assembly.
//!
//! The only place that depends on cs-infra, cs-platform and cs-app at once.
//! It builds concrete adapters and hands them to the application as ports;
//! it makes no decisions of its own.

use std::path::Path;
use std::sync::Arc;

use cs_app::{App, AppDeps};
use cs_core::app_dirs::AppDirs;
use cs_core::ports::*;
use cs_core::settings::Settings;
use cs_infra::db::pool::{init_db_pool, DbPool};
use cs_infra::db::repositories::DieselHistoryRepository;
use cs_infra::db::DieselSqliteExecutor;
use cs_infra::settings::FileSettingsRepository;
use cs_infra::SystemClock;
use cs_platform::adapters::{ManualFrontmostApplication, NoopPasteTrigger};
use cs_platform::clipboard::SystemClipboard;
use cs_platform::runtime::ClipboardMonitor;
use tracing::info;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),

    #[error("Clipboard monitor initialization failed: {0}")]
    MonitorInit(#[from] MonitorError),
}

fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {e}"))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url).map_err(|e| WiringError::DatabaseInit(format!("{e:#}")))
}

/// Builds every port implementation for the given directories.
///
/// `clipboard` is injected so tests and alternative front ends can swap the
/// system clipboard for another adapter.
pub fn wire_dependencies(
    app_dirs: &AppDirs,
    clipboard: Arc<dyn SystemClipboardPort>,
) -> WiringResult<AppDeps> {
    let pool = create_db_pool(&app_dirs.db_path())?;
    let store = Arc::new(DieselHistoryRepository::new(DieselSqliteExecutor::new(pool)));
    info!(db_path = %app_dirs.db_path().display(), "history store opened");

    Ok(AppDeps {
        clipboard,
        frontmost_application: Arc::new(ManualFrontmostApplication::new(None)),
        paste_trigger: Arc::new(NoopPasteTrigger),
        history: store.clone(),
        applications: store,
        settings: Arc::new(FileSettingsRepository::new(app_dirs.settings_path())),
        clock: Arc::new(SystemClock),
    })
}

/// Default clipboard adapter for the running platform.
pub fn system_clipboard() -> WiringResult<Arc<dyn SystemClipboardPort>> {
    let clipboard = SystemClipboard::new()
        .map_err(|e| WiringError::ClipboardInit(format!("{e:#}")))?;
    Ok(Arc::new(clipboard))
}

/// Creates the monitor around the capture use case and assembles the `App`.
///
/// Must run inside a tokio runtime; the monitor starts polling immediately.
pub fn build_app(deps: AppDeps, settings: &Settings) -> WiringResult<App> {
    let monitor = ClipboardMonitor::new(
        deps.clipboard.clone(),
        App::capture_handler(&deps),
        settings.monitor.poll_interval(),
    )?;
    Ok(App::new(deps, Arc::new(monitor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_platform::clipboard::InMemoryClipboard;

    #[tokio::test]
    async fn wires_a_working_app_under_the_data_root() {
        let dir = tempfile::tempdir().unwrap();
        let app_dirs = AppDirs {
            app_data_root: dir.path().join("clipstash"),
        };

        let deps = wire_dependencies(&app_dirs, Arc::new(InMemoryClipboard::new())).unwrap();
        let app = build_app(deps, &Settings::default()).unwrap();

        assert!(app_dirs.db_path().exists());
        assert!(app.list_history().await.unwrap().is_empty());
        assert!(!app.monitor_status().paused);
        app.stop_monitor().await.unwrap();
    }

    #[test]
    fn unusable_db_location_is_a_database_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let app_dirs = AppDirs {
            app_data_root: blocker.join("nested"),
        };

        let err = wire_dependencies(&app_dirs, Arc::new(InMemoryClipboard::new()))
            .err()
            .unwrap();
        assert!(matches!(err, WiringError::DatabaseInit(_)));
    }
}
