mod auto_paste;
mod capture_clipboard;
mod restore_to_clipboard;

pub use auto_paste::AutoPaste;
pub use capture_clipboard::{CaptureClipboardUseCase, CaptureOutcome};
pub use restore_to_clipboard::RestoreToClipboard;
