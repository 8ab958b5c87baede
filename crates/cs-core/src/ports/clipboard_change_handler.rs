//! Clipboard change handler port
//!
//! The platform monitor detects changes and reads the items; the app layer
//! implements this trait to decide what gets persisted.

use anyhow::Result;

use crate::clipboard::RepresentationSet;

#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// Called once per observed change-counter transition.
    async fn on_clipboard_changed(&self, items: Vec<RepresentationSet>) -> Result<()>;
}
