//! Port interfaces for the application layer
//!
//! Ports define the contract between use cases and the infrastructure or
//! platform implementations behind them.

pub mod app_dirs;
mod clipboard_change_handler;
mod clock;
pub mod errors;
mod frontmost_application;
pub mod history;
mod monitor_control;
mod paste_trigger;
pub mod settings;
mod system_clipboard;

pub use app_dirs::AppDirsPort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clock::*;
pub use errors::{AppDirsError, HistoryStoreError, MonitorError};
pub use frontmost_application::FrontmostApplicationPort;
pub use history::{ApplicationRepositoryPort, HistoryRepositoryPort};
pub use monitor_control::{MonitorControlPort, MonitorStatus};
pub use paste_trigger::PasteTriggerPort;
pub use settings::SettingsPort;
pub use system_clipboard::SystemClipboardPort;
