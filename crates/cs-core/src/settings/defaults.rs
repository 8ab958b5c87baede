use super::model::*;
use crate::history::ErasureTarget;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            ignore_apps: true,
            ignore_transient: true,
            ignore_confidential: true,
        }
    }
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            copy_as_plain_text: false,
            paste_automatically: false,
        }
    }
}

impl Default for RetentionSettings {
    fn default() -> Self {
        Self {
            erase_on_quit: false,
            erasure_target: ErasureTarget::Never,
            periodic_interval_secs: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            monitor: MonitorSettings::default(),
            clipboard: ClipboardSettings::default(),
            retention: RetentionSettings::default(),
        }
    }
}
