use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use cs_core::clipboard::RepresentationSet;
use cs_core::ports::SystemClipboardPort;

use super::change_tracker::ChangeTracker;
use super::common::CommonClipboardImpl;

/// The operating system clipboard, accessed through clipboard-rs.
///
/// A fresh context is opened per call so the adapter stays `Send + Sync` on
/// every platform.
pub struct SystemClipboard {
    tracker: Mutex<ChangeTracker>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        // Fail early when no clipboard is reachable (e.g. no display server).
        open_context()?;
        Ok(Self {
            tracker: Mutex::new(ChangeTracker::default()),
        })
    }
}

#[cfg(target_os = "linux")]
fn open_context() -> Result<ClipboardContext> {
    use clipboard_rs::ClipboardContextX11Options;

    ClipboardContext::new_with_options(ClipboardContextX11Options {
        read_timeout: Some(std::time::Duration::from_millis(500)),
    })
    .map_err(|e| anyhow!("open clipboard failed: {e}"))
}

#[cfg(not(target_os = "linux"))]
fn open_context() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| anyhow!("open clipboard failed: {e}"))
}

impl SystemClipboardPort for SystemClipboard {
    fn change_count(&self) -> Result<i64> {
        let items = self.read_items()?;
        let mut tracker = self.tracker.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tracker.observe(&items))
    }

    fn read_items(&self) -> Result<Vec<RepresentationSet>> {
        let ctx = open_context()?;
        CommonClipboardImpl::read_items(&ctx)
    }

    fn write_items(&self, items: &[RepresentationSet]) -> Result<()> {
        let ctx = open_context()?;
        CommonClipboardImpl::write_items(&ctx, items)
    }
}
