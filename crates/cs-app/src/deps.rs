//! # Application Dependencies
//!
//! Plain grouping of the ports every use case is built from. Not a builder:
//! no defaults, no optional fields, no construction logic.

use std::sync::Arc;

use cs_core::ports::*;

#[derive(Clone)]
pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub frontmost_application: Arc<dyn FrontmostApplicationPort>,
    pub paste_trigger: Arc<dyn PasteTriggerPort>,

    // History store
    pub history: Arc<dyn HistoryRepositoryPort>,
    pub applications: Arc<dyn ApplicationRepositoryPort>,

    // Settings
    pub settings: Arc<dyn SettingsPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
