mod monitor;

pub use monitor::{ClipboardMonitor, DEFAULT_POLL_INTERVAL};
