//! Application facade handed to the binary and to any presentation layer.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use cs_core::history::{ErasureTarget, HistoryChange, HistoryObject, SourceApplication};
use cs_core::ids::{ApplicationId, HistoryId};
use cs_core::ports::{MonitorControlPort, MonitorError, MonitorStatus};
use cs_core::settings::Settings;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::usecases::*;
use crate::AppDeps;

/// The application runtime.
///
/// Use cases are built from [`AppDeps`] on demand; they only hold `Arc`
/// handles so construction is cheap.
pub struct App {
    deps: AppDeps,
    monitor: Arc<dyn MonitorControlPort>,
}

impl App {
    /// This constructor signature is the dependency manifest. The monitor is
    /// passed separately because it is built around [`App::capture_handler`].
    pub fn new(deps: AppDeps, monitor: Arc<dyn MonitorControlPort>) -> Self {
        Self { deps, monitor }
    }

    /// Clipboard change handler to drive the monitor with.
    pub fn capture_handler(deps: &AppDeps) -> Arc<CaptureClipboardUseCase> {
        Arc::new(CaptureClipboardUseCase::new(
            deps.history.clone(),
            deps.frontmost_application.clone(),
            deps.settings.clone(),
            deps.clock.clone(),
        ))
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    // History

    pub async fn list_history(&self) -> Result<Vec<HistoryObject>> {
        ListHistory::new(self.deps.history.clone()).execute().await
    }

    pub async fn get_history(&self, id: &HistoryId) -> Result<Option<HistoryObject>> {
        ListHistory::new(self.deps.history.clone()).get(id).await
    }

    pub async fn search_history(&self, query: &str) -> Result<Option<Vec<HistoryObject>>> {
        SearchHistory::new(self.deps.history.clone())
            .execute(query)
            .await
    }

    pub async fn delete_history(&self, id: &HistoryId) -> Result<bool> {
        DeleteHistory::new(self.deps.history.clone()).execute(id).await
    }

    pub async fn erase_history(&self) -> Result<u64> {
        EraseHistory::new(self.deps.history.clone()).execute().await
    }

    pub async fn delete_all_before(&self, target: ErasureTarget) -> Result<u64> {
        self.retention().execute(target).await
    }

    pub async fn delete_all_before_index(&self, index: i64) -> Result<u64> {
        self.retention().execute_index(index).await
    }

    pub async fn toggle_favorite(&self, id: &HistoryId) -> Result<Option<bool>> {
        ToggleFavorite::new(self.deps.history.clone()).execute(id).await
    }

    pub fn subscribe_changes(&self) -> broadcast::Receiver<HistoryChange> {
        self.deps.history.subscribe()
    }

    // Clipboard

    pub fn add_to_clipboard(&self, object: &HistoryObject, as_plain: bool) -> Result<()> {
        self.restore().execute(object, as_plain)
    }

    pub async fn add_to_clipboard_by_id(
        &self,
        id: &HistoryId,
        as_plain: Option<bool>,
    ) -> Result<bool> {
        self.restore().execute_by_id(id, as_plain).await
    }

    pub async fn panel_dismissed(&self) -> bool {
        AutoPaste::new(self.deps.settings.clone(), self.deps.paste_trigger.clone())
            .on_panel_dismissed()
            .await
    }

    // Applications

    pub async fn list_applications(&self) -> Result<Vec<SourceApplication>> {
        self.applications().list().await
    }

    pub async fn list_ignored_applications(&self) -> Result<Vec<SourceApplication>> {
        self.applications().list_ignored().await
    }

    pub async fn ignore_application(&self, bundle_url: &str) -> Result<SourceApplication> {
        self.applications().ignore(bundle_url).await
    }

    pub async fn unignore_applications(&self, ids: &[ApplicationId]) -> Result<u64> {
        self.applications().unignore(ids).await
    }

    // Settings

    pub async fn settings(&self) -> Result<Settings> {
        GetSettings::new(self.deps.settings.clone()).execute().await
    }

    pub async fn update_settings(
        &self,
        update: impl FnOnce(&mut Settings) + Send,
    ) -> Result<Settings> {
        UpdateSettings::new(self.deps.settings.clone())
            .execute(update)
            .await
    }

    // Monitor

    pub async fn start_monitor(&self) -> Result<(), MonitorError> {
        self.monitor.start().await
    }

    pub async fn stop_monitor(&self) -> Result<(), MonitorError> {
        self.monitor.stop().await
    }

    pub async fn pause_monitor(&self, duration: Duration) -> Result<(), MonitorError> {
        self.monitor.pause(duration).await
    }

    pub async fn resume_monitor(&self) -> Result<(), MonitorError> {
        self.monitor.resume().await
    }

    pub fn monitor_status(&self) -> MonitorStatus {
        self.monitor.status()
    }

    pub fn subscribe_monitor_status(&self) -> watch::Receiver<MonitorStatus> {
        self.monitor.subscribe_status()
    }

    // Lifecycle

    pub fn spawn_periodic_retention(&self, interval: Duration) -> JoinHandle<()> {
        spawn_periodic_retention(self.retention(), self.deps.settings.clone(), interval)
    }

    /// Stops the monitor and applies the quit-time retention rule.
    pub async fn shutdown(&self) -> Result<ShutdownAction> {
        if let Err(err) = self.monitor.stop().await {
            tracing::warn!(error = %err, "failed to stop clipboard monitor");
        }

        ShutdownRetention::new(
            self.deps.history.clone(),
            self.deps.settings.clone(),
            self.retention(),
        )
        .execute()
        .await
    }

    fn retention(&self) -> ApplyRetention {
        ApplyRetention::new(self.deps.history.clone(), self.deps.clock.clone())
    }

    fn restore(&self) -> RestoreToClipboard {
        RestoreToClipboard::new(
            self.deps.history.clone(),
            self.deps.clipboard.clone(),
            self.deps.settings.clone(),
        )
    }

    fn applications(&self) -> ManageApplications {
        ManageApplications::new(self.deps.applications.clone())
    }
}
