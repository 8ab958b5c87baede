//! System clipboard port
//!
//! Byte-exact access to every item on the shared clipboard, plus the
//! monotonically increasing change counter used for change detection.

use anyhow::Result;

use crate::clipboard::RepresentationSet;

pub trait SystemClipboardPort: Send + Sync {
    /// Current value of the clipboard change counter. Differs from the last
    /// observed value if and only if the clipboard was written since.
    fn change_count(&self) -> Result<i64>;

    /// Every item currently on the clipboard, representations in the order
    /// the producer wrote them. Empty when the clipboard is empty.
    fn read_items(&self) -> Result<Vec<RepresentationSet>>;

    /// Replaces the clipboard contents with `items`, in order.
    fn write_items(&self, items: &[RepresentationSet]) -> Result<()>;
}
