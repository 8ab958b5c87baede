use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clipboard::IgnorePolicy;
use crate::history::ErasureTarget;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    pub poll_interval_ms: u64,
    pub ignore_apps: bool,
    pub ignore_transient: bool,
    pub ignore_confidential: bool,
}

impl MonitorSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn ignore_policy(&self) -> IgnorePolicy {
        IgnorePolicy {
            ignore_apps: self.ignore_apps,
            ignore_transient: self.ignore_transient,
            ignore_confidential: self.ignore_confidential,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Strip formatted representations when restoring to the clipboard.
    pub copy_as_plain_text: bool,

    /// Trigger a paste after the panel is dismissed.
    pub paste_automatically: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionSettings {
    pub erase_on_quit: bool,
    pub erasure_target: ErasureTarget,

    /// Interval of the background retention task; `None` disables it.
    pub periodic_interval_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub monitor: MonitorSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,

    #[serde(default)]
    pub retention: RetentionSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
