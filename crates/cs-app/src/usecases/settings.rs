use std::sync::Arc;

use anyhow::{Context, Result};
use cs_core::ports::SettingsPort;
use cs_core::settings::Settings;
use tracing::info;

pub struct GetSettings {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        self.settings.load().await.context("failed to load settings")
    }
}

/// Read-modify-write of the persisted settings.
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    #[tracing::instrument(name = "usecase.update_settings.execute", skip_all)]
    pub async fn execute(&self, update: impl FnOnce(&mut Settings) + Send) -> Result<Settings> {
        let mut settings = self.settings.load().await.context("failed to load settings")?;
        update(&mut settings);
        self.settings
            .save(&settings)
            .await
            .context("failed to save settings")?;
        info!("settings updated");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::MemorySettings;
    use cs_core::ErasureTarget;

    #[tokio::test]
    async fn update_persists_the_change() {
        let port = Arc::new(MemorySettings::default());
        let update = UpdateSettings::new(port.clone());

        update
            .execute(|s| s.retention.erasure_target = ErasureTarget::Month)
            .await
            .unwrap();

        let loaded = GetSettings::new(port).execute().await.unwrap();
        assert_eq!(loaded.retention.erasure_target, ErasureTarget::Month);
        assert!(!loaded.retention.erase_on_quit);
    }
}
