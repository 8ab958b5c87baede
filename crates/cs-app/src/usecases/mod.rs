//! Business logic use cases
//!
//! ```text
//! ClipboardMonitor (platform)
//!         ↓
//! CaptureClipboardUseCase → HistoryRepositoryPort::create_history
//!         ↓
//! ListHistory / SearchHistory → consumers
//!         ↓
//! RestoreToClipboard → SystemClipboardPort::write_items
//! ```

pub mod applications;
pub mod clipboard;
pub mod history;
pub mod lifecycle;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use applications::ManageApplications;
pub use clipboard::{
    AutoPaste, CaptureClipboardUseCase, CaptureOutcome, RestoreToClipboard,
};
pub use history::{
    ApplyRetention, DeleteHistory, EraseHistory, ListHistory, SearchHistory, ToggleFavorite,
};
pub use lifecycle::{spawn_periodic_retention, ShutdownAction, ShutdownRetention};
pub use settings::{GetSettings, UpdateSettings};
