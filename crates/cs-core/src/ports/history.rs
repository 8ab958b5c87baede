//! History store ports.

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::errors::HistoryStoreError;
use crate::history::{CreateOutcome, HistoryChange, HistoryObject, NewHistory, SourceApplication};
use crate::ids::{ApplicationId, HistoryId};

type StoreResult<T> = Result<T, HistoryStoreError>;

/// Persisted clipboard history. Every mutation goes through one serialized
/// write path and publishes a [`HistoryChange`] after commit.
#[async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    /// Resolves `new.application` (lookup-or-create) and, unless it is
    /// flagged as ignored, persists one object with one item per input.
    async fn create_history(&self, new: NewHistory) -> StoreResult<CreateOutcome>;

    /// Newest first.
    async fn fetch_all_sorted_by_date(&self) -> StoreResult<Vec<HistoryObject>>;

    async fn get_history(&self, id: &HistoryId) -> StoreResult<Option<HistoryObject>>;

    /// Returns `false` when the object was already gone.
    async fn delete_history(&self, id: &HistoryId) -> StoreResult<bool>;

    async fn erase_history(&self) -> StoreResult<u64>;

    /// Removes every object with `date_added_ms < cutoff_ms`.
    async fn delete_all_before(&self, cutoff_ms: i64) -> StoreResult<u64>;

    /// New favorite state, or `None` when the object does not exist.
    async fn toggle_favorite(&self, id: &HistoryId) -> StoreResult<Option<bool>>;

    fn subscribe(&self) -> broadcast::Receiver<HistoryChange>;
}

#[async_trait]
pub trait ApplicationRepositoryPort: Send + Sync {
    async fn get_application(&self, bundle_url: &str) -> StoreResult<Option<SourceApplication>>;

    /// Lookup-or-create; an existing row keeps its flag.
    async fn create_application(
        &self,
        bundle_url: &str,
        should_ignore: bool,
    ) -> StoreResult<SourceApplication>;

    async fn set_ignored(
        &self,
        id: &ApplicationId,
        should_ignore: bool,
    ) -> StoreResult<Option<SourceApplication>>;

    /// Updates every listed application in one transaction.
    async fn set_ignored_many(&self, ids: &[ApplicationId], should_ignore: bool)
        -> StoreResult<u64>;

    async fn list_applications(&self) -> StoreResult<Vec<SourceApplication>>;

    async fn list_ignored_applications(&self) -> StoreResult<Vec<SourceApplication>>;
}
