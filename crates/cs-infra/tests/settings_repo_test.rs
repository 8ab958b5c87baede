use cs_core::history::ErasureTarget;
use cs_core::ports::SettingsPort;
use cs_core::settings::{Settings, CURRENT_SCHEMA_VERSION};
use cs_infra::settings::FileSettingsRepository;

#[tokio::test]
async fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

    let settings = repo.load().await.unwrap();
    assert_eq!(settings, Settings::default());
    assert!(!repo.path().exists());
}

#[tokio::test]
async fn save_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSettingsRepository::new(dir.path().join("nested/profile/settings.json"));

    let mut settings = Settings::default();
    settings.clipboard.copy_as_plain_text = true;
    settings.retention.erasure_target = ErasureTarget::Month;
    settings.monitor.poll_interval_ms = 100;
    repo.save(&settings).await.unwrap();

    assert_eq!(repo.load().await.unwrap(), settings);
    assert!(!repo.path().with_extension("json.tmp").exists());
}

#[tokio::test]
async fn old_schema_is_upgraded_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"schema_version": 0, "monitor": {"poll_interval_ms": 500, "ignore_apps": false, "ignore_transient": true, "ignore_confidential": true}}"#).unwrap();

    let repo = FileSettingsRepository::new(&path);
    let settings = repo.load().await.unwrap();
    assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(settings.monitor.poll_interval_ms, 500);
    assert!(!settings.monitor.ignore_apps);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["schema_version"], CURRENT_SCHEMA_VERSION);
}

#[tokio::test]
async fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(FileSettingsRepository::new(&path).load().await.is_err());
}
