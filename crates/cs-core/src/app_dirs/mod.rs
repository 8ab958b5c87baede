use std::path::PathBuf;

/// Resolved on-disk locations for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    pub fn settings_path(&self) -> PathBuf {
        self.app_data_root.join("settings.json")
    }

    pub fn db_path(&self) -> PathBuf {
        self.app_data_root.join("history.db")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_live_under_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/clipstash"),
        };
        assert_eq!(dirs.db_path(), PathBuf::from("/tmp/clipstash/history.db"));
        assert_eq!(dirs.settings_path(), PathBuf::from("/tmp/clipstash/settings.json"));
        assert!(dirs.logs_dir().ends_with("logs"));
    }
}
