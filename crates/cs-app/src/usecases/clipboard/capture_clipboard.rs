use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use cs_core::clipboard::{IgnoreReason, RepresentationSet};
use cs_core::history::{CreateOutcome, NewHistory};
use cs_core::ids::HistoryId;
use cs_core::ports::{
    ClipboardChangeHandler, ClockPort, FrontmostApplicationPort, HistoryRepositoryPort,
    SettingsPort,
};
use cs_core::settings::Settings;
use tracing::{debug, info, info_span, warn, Instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Stored(HistoryId),
    /// The clipboard held no items.
    Empty,
    Ignored(IgnoreReason),
    /// Persistence failed; already logged.
    Failed,
}

/// Reacts to an observed clipboard change: applies the ignore policy and
/// records the change as one history object.
///
/// Any item matching the policy discards the whole change. The source
/// application check happens once per change, inside the store, so the
/// lookup-or-create and the insert share one transaction.
pub struct CaptureClipboardUseCase {
    history: Arc<dyn HistoryRepositoryPort>,
    frontmost_application: Arc<dyn FrontmostApplicationPort>,
    settings: Arc<dyn SettingsPort>,
    clock: Arc<dyn ClockPort>,
}

impl CaptureClipboardUseCase {
    pub fn new(
        history: Arc<dyn HistoryRepositoryPort>,
        frontmost_application: Arc<dyn FrontmostApplicationPort>,
        settings: Arc<dyn SettingsPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            history,
            frontmost_application,
            settings,
            clock,
        }
    }

    async fn load_settings(&self) -> Settings {
        self.settings.load().await.unwrap_or_else(|err| {
            warn!(error = %err, "failed to load settings, capturing with defaults");
            Settings::default()
        })
    }

    pub async fn execute(&self, items: Vec<RepresentationSet>) -> CaptureOutcome {
        let span = info_span!("usecase.capture_clipboard.execute", items = items.len());

        async move {
            if items.is_empty() {
                debug!("clipboard is empty, nothing to capture");
                return CaptureOutcome::Empty;
            }

            let policy = self.load_settings().await.monitor.ignore_policy();
            if let Some(reason) = policy.evaluate_batch(&items) {
                debug!(?reason, "clipboard change ignored");
                return CaptureOutcome::Ignored(reason);
            }

            let mut new = NewHistory::new(self.clock.now_ms(), items);
            if let Some(bundle_url) = self.frontmost_application.frontmost_application() {
                new = new.with_application(bundle_url);
            }

            match self.history.create_history(new).await {
                Ok(CreateOutcome::Created(id)) => {
                    info!(history_id = %id, "clipboard change captured");
                    CaptureOutcome::Stored(id)
                }
                Ok(CreateOutcome::IgnoredApplication) => {
                    debug!("source application is ignored");
                    CaptureOutcome::Ignored(IgnoreReason::IgnoredApplication)
                }
                Err(err) => {
                    warn!(error = %err, "failed to persist clipboard change");
                    CaptureOutcome::Failed
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl ClipboardChangeHandler for CaptureClipboardUseCase {
    async fn on_clipboard_changed(&self, items: Vec<RepresentationSet>) -> Result<()> {
        self.execute(items).await;
        Ok(())
    }
}
