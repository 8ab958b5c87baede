//! Hand-written fake ports shared by the use case unit tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use cs_core::clipboard::RepresentationSet;
use cs_core::history::{
    CreateOutcome, HistoryChange, HistoryObject, NewHistory, SourceApplication,
};
use cs_core::ids::{ApplicationId, HistoryId};
use cs_core::ports::*;
use cs_core::settings::Settings;
use tokio::sync::broadcast;

pub fn text(value: &str) -> RepresentationSet {
    RepresentationSet::from_pairs([("public.utf8-plain-text", value.as_bytes().to_vec())]).unwrap()
}

pub struct FixedClock(pub AtomicI64);

impl FixedClock {
    pub fn at(ms: i64) -> Self {
        Self(AtomicI64::new(ms))
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct MemorySettings(pub Mutex<Settings>);

impl MemorySettings {
    pub fn with(settings: Settings) -> Self {
        Self(Mutex::new(settings))
    }
}

#[async_trait]
impl SettingsPort for MemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.0.lock().unwrap() = settings.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct FixedFrontmost(pub Option<String>);

impl FrontmostApplicationPort for FixedFrontmost {
    fn frontmost_application(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub written: Mutex<Vec<Vec<RepresentationSet>>>,
}

impl SystemClipboardPort for RecordingClipboard {
    fn change_count(&self) -> Result<i64> {
        Ok(self.written.lock().unwrap().len() as i64)
    }

    fn read_items(&self) -> Result<Vec<RepresentationSet>> {
        Ok(self.written.lock().unwrap().last().cloned().unwrap_or_default())
    }

    fn write_items(&self, items: &[RepresentationSet]) -> Result<()> {
        self.written.lock().unwrap().push(items.to_vec());
        Ok(())
    }
}

/// In-memory history store with the same observable semantics as the
/// SQLite one, minus durability.
pub struct MemoryHistory {
    pub objects: Mutex<Vec<HistoryObject>>,
    pub applications: Mutex<Vec<SourceApplication>>,
    pub fail_writes: AtomicBool,
    changes: broadcast::Sender<HistoryChange>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            objects: Mutex::new(Vec::new()),
            applications: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
            changes,
        }
    }
}

impl MemoryHistory {
    fn check_writable(&self) -> Result<(), HistoryStoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HistoryStoreError::Persistence("disk full".into()));
        }
        Ok(())
    }

    fn lookup_or_create(&self, bundle_url: &str, should_ignore: bool) -> SourceApplication {
        let mut apps = self.applications.lock().unwrap();
        if let Some(app) = apps.iter().find(|a| a.bundle_url == bundle_url) {
            return app.clone();
        }
        let app = SourceApplication {
            id: ApplicationId::new(),
            bundle_url: bundle_url.to_string(),
            should_ignore,
        };
        apps.push(app.clone());
        app
    }

    pub fn dates(&self) -> Vec<i64> {
        self.objects.lock().unwrap().iter().map(|o| o.date_added_ms).collect()
    }
}

#[async_trait]
impl HistoryRepositoryPort for MemoryHistory {
    async fn create_history(&self, new: NewHistory) -> Result<CreateOutcome, HistoryStoreError> {
        self.check_writable()?;
        let application = new
            .application
            .as_deref()
            .map(|url| self.lookup_or_create(url, false));
        if application.as_ref().is_some_and(|a| a.should_ignore) {
            return Ok(CreateOutcome::IgnoredApplication);
        }
        let object = HistoryObject {
            id: new.id.clone(),
            date_added_ms: new.date_added_ms,
            is_favorited: false,
            application,
            items: new.history_items(),
        };
        self.objects.lock().unwrap().push(object);
        let _ = self.changes.send(HistoryChange::Created(new.id.clone()));
        Ok(CreateOutcome::Created(new.id))
    }

    async fn fetch_all_sorted_by_date(&self) -> Result<Vec<HistoryObject>, HistoryStoreError> {
        let mut all = self.objects.lock().unwrap().clone();
        all.sort_by(|a, b| b.date_added_ms.cmp(&a.date_added_ms));
        Ok(all)
    }

    async fn get_history(&self, id: &HistoryId) -> Result<Option<HistoryObject>, HistoryStoreError> {
        Ok(self.objects.lock().unwrap().iter().find(|o| &o.id == id).cloned())
    }

    async fn delete_history(&self, id: &HistoryId) -> Result<bool, HistoryStoreError> {
        self.check_writable()?;
        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|o| &o.id != id);
        let removed = objects.len() != before;
        if removed {
            let _ = self.changes.send(HistoryChange::Deleted(id.clone()));
        }
        Ok(removed)
    }

    async fn erase_history(&self) -> Result<u64, HistoryStoreError> {
        self.check_writable()?;
        let removed = std::mem::take(&mut *self.objects.lock().unwrap()).len() as u64;
        let _ = self.changes.send(HistoryChange::Erased);
        Ok(removed)
    }

    async fn delete_all_before(&self, cutoff_ms: i64) -> Result<u64, HistoryStoreError> {
        self.check_writable()?;
        let mut objects = self.objects.lock().unwrap();
        let before = objects.len();
        objects.retain(|o| o.date_added_ms >= cutoff_ms);
        let removed = (before - objects.len()) as u64;
        if removed > 0 {
            let _ = self.changes.send(HistoryChange::Pruned { removed });
        }
        Ok(removed)
    }

    async fn toggle_favorite(&self, id: &HistoryId) -> Result<Option<bool>, HistoryStoreError> {
        self.check_writable()?;
        let mut objects = self.objects.lock().unwrap();
        let Some(object) = objects.iter_mut().find(|o| &o.id == id) else {
            return Ok(None);
        };
        object.is_favorited = !object.is_favorited;
        let _ = self.changes.send(HistoryChange::FavoriteToggled(id.clone()));
        Ok(Some(object.is_favorited))
    }

    fn subscribe(&self) -> broadcast::Receiver<HistoryChange> {
        self.changes.subscribe()
    }
}

#[async_trait]
impl ApplicationRepositoryPort for MemoryHistory {
    async fn get_application(
        &self,
        bundle_url: &str,
    ) -> Result<Option<SourceApplication>, HistoryStoreError> {
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.bundle_url == bundle_url)
            .cloned())
    }

    async fn create_application(
        &self,
        bundle_url: &str,
        should_ignore: bool,
    ) -> Result<SourceApplication, HistoryStoreError> {
        Ok(self.lookup_or_create(bundle_url, should_ignore))
    }

    async fn set_ignored(
        &self,
        id: &ApplicationId,
        should_ignore: bool,
    ) -> Result<Option<SourceApplication>, HistoryStoreError> {
        let mut apps = self.applications.lock().unwrap();
        Ok(apps.iter_mut().find(|a| &a.id == id).map(|app| {
            app.should_ignore = should_ignore;
            app.clone()
        }))
    }

    async fn set_ignored_many(
        &self,
        ids: &[ApplicationId],
        should_ignore: bool,
    ) -> Result<u64, HistoryStoreError> {
        let mut apps = self.applications.lock().unwrap();
        let mut updated = 0;
        for app in apps.iter_mut().filter(|a| ids.contains(&a.id)) {
            app.should_ignore = should_ignore;
            updated += 1;
        }
        Ok(updated)
    }

    async fn list_applications(&self) -> Result<Vec<SourceApplication>, HistoryStoreError> {
        Ok(self.applications.lock().unwrap().clone())
    }

    async fn list_ignored_applications(
        &self,
    ) -> Result<Vec<SourceApplication>, HistoryStoreError> {
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.should_ignore)
            .cloned()
            .collect())
    }
}
