pub mod defaults;
pub mod model;

pub use model::{
    ClipboardSettings, MonitorSettings, RetentionSettings, Settings, CURRENT_SCHEMA_VERSION,
};
