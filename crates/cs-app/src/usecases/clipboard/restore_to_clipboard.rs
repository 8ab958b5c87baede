use std::sync::Arc;

use anyhow::{Context, Result};
use cs_core::clipboard::{
    Representation, RepresentationSet, TypeCategory, PIPELINE_MARKER_TYPE,
};
use cs_core::history::{HistoryItem, HistoryObject};
use cs_core::ids::HistoryId;
use cs_core::ports::{HistoryRepositoryPort, SettingsPort, SystemClipboardPort};
use tracing::{info, info_span, warn, Instrument};

/// Writes a history object back to the system clipboard.
///
/// Items go out in ordinal order with their types in stored order. Every
/// item carries the pipeline marker so the monitor skips the resulting
/// clipboard change.
pub struct RestoreToClipboard {
    history: Arc<dyn HistoryRepositoryPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
    settings: Arc<dyn SettingsPort>,
}

impl RestoreToClipboard {
    pub fn new(
        history: Arc<dyn HistoryRepositoryPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
        settings: Arc<dyn SettingsPort>,
    ) -> Self {
        Self {
            history,
            clipboard,
            settings,
        }
    }

    pub fn execute(&self, object: &HistoryObject, as_plain: bool) -> Result<()> {
        let _span = info_span!(
            "usecase.restore_to_clipboard.execute",
            history_id = %object.id,
            as_plain
        )
        .entered();

        let mut items: Vec<&HistoryItem> = object.items.iter().collect();
        items.sort_by_key(|item| item.item);

        let sets = items
            .into_iter()
            .map(|item| restorable(item, as_plain))
            .collect::<Result<Vec<_>>>()?;

        self.clipboard
            .write_items(&sets)
            .context("failed to write history object to clipboard")?;

        info!(items = sets.len(), "history object restored to clipboard");
        Ok(())
    }

    /// Looks the object up and restores it. `as_plain` falls back to the
    /// copy-as-plain-text setting. Returns `false` when the id is unknown.
    pub async fn execute_by_id(&self, id: &HistoryId, as_plain: Option<bool>) -> Result<bool> {
        let span = info_span!("usecase.restore_to_clipboard.execute_by_id", history_id = %id);

        async move {
            let Some(object) = self.history.get_history(id).await? else {
                warn!("history object not found");
                return Ok(false);
            };

            let as_plain = match as_plain {
                Some(value) => value,
                None => self.settings.load().await?.clipboard.copy_as_plain_text,
            };

            self.execute(&object, as_plain)?;
            Ok(true)
        }
        .instrument(span)
        .await
    }
}

/// An item whose every type is formatted still goes out as a marker-only
/// item, so the clipboard is never cleared by a plain restore.
fn restorable(item: &HistoryItem, as_plain: bool) -> Result<RepresentationSet> {
    let mut representations: Vec<Representation> = item
        .representations()
        .filter(|r| !(as_plain && TypeCategory::Formatted.contains(&r.type_id)))
        .collect();

    if !representations.iter().any(|r| r.type_id == PIPELINE_MARKER_TYPE) {
        representations.push(Representation::marker(PIPELINE_MARKER_TYPE));
    }

    Ok(RepresentationSet::new(representations)?)
}
