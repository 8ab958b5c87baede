use cs_core::ports::SettingsPort;
use cs_core::settings::Settings;
use tracing::{error, warn};

/// Loads settings; a broken file falls back to defaults, which are saved
/// back so the next start reads a valid file.
pub async fn load_settings(settings: &dyn SettingsPort) -> Settings {
    match settings.load().await {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "failed to load settings, using defaults");
            let defaults = Settings::default();
            if let Err(err) = settings.save(&defaults).await {
                error!(error = %err, "failed to save default settings");
            }
            defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_infra::settings::FileSettingsRepository;

    #[tokio::test]
    async fn corrupt_file_is_replaced_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo = FileSettingsRepository::new(&path);

        let settings = load_settings(&repo).await;

        assert_eq!(settings, Settings::default());
        assert_eq!(repo.load().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn partial_section_keeps_the_edited_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let edited = r#"{"monitor":{"ignore_confidential":false},"retention":{"erase_on_quit":true,"erasure_target":1}}"#;
        std::fs::write(&path, edited).unwrap();
        let repo = FileSettingsRepository::new(&path);

        let settings = load_settings(&repo).await;

        assert!(!settings.monitor.ignore_confidential);
        assert!(settings.retention.erase_on_quit);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), edited);
    }
}
