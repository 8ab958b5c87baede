use std::sync::Arc;

use cs_core::ports::{PasteTriggerPort, SettingsPort};
use tracing::{debug, info_span, warn, Instrument};

/// Fires the paste hook once the history panel has been dismissed, when the
/// user enabled "paste automatically".
pub struct AutoPaste {
    settings: Arc<dyn SettingsPort>,
    paste_trigger: Arc<dyn PasteTriggerPort>,
}

impl AutoPaste {
    pub fn new(settings: Arc<dyn SettingsPort>, paste_trigger: Arc<dyn PasteTriggerPort>) -> Self {
        Self {
            settings,
            paste_trigger,
        }
    }

    /// Returns whether a paste was triggered successfully.
    pub async fn on_panel_dismissed(&self) -> bool {
        async move {
            let enabled = match self.settings.load().await {
                Ok(settings) => settings.clipboard.paste_automatically,
                Err(err) => {
                    warn!(error = %err, "failed to load settings, skipping auto paste");
                    return false;
                }
            };

            if !enabled {
                debug!("auto paste disabled");
                return false;
            }

            match self.paste_trigger.trigger_paste().await {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "paste trigger failed");
                    false
                }
            }
        }
        .instrument(info_span!("usecase.auto_paste.on_panel_dismissed"))
        .await
    }
}
