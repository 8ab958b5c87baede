use std::collections::HashMap;

use anyhow::Result;
use cs_core::history::{
    CreateOutcome, HistoryChange, HistoryItem, HistoryObject, NewHistory, SourceApplication,
};
use cs_core::ids::{ApplicationId, HistoryId};
use cs_core::ports::{ApplicationRepositoryPort, HistoryRepositoryPort, HistoryStoreError};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, debug_span, warn};

use crate::db::mappers::{HistoryItemRowMapper, HistoryObjectRowMapper, SourceApplicationRowMapper};
use crate::db::models::{HistoryItemRow, HistoryObjectRow, NewHistoryItemRow, SourceApplicationRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::{history_item, history_object, source_application};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

type StoreResult<T> = std::result::Result<T, HistoryStoreError>;

fn persistence(err: anyhow::Error) -> HistoryStoreError {
    HistoryStoreError::Persistence(format!("{err:#}"))
}

fn query(err: anyhow::Error) -> HistoryStoreError {
    HistoryStoreError::Query(format!("{err:#}"))
}

/// SQLite-backed history store.
///
/// Writers take `write_lock` and then open an `IMMEDIATE` transaction, so at
/// most one write is in flight and it holds the database write lock from its
/// first statement. Readers run inside a deferred transaction and see the last
/// committed state. Change notifications are sent only after commit.
pub struct DieselHistoryRepository<E> {
    executor: E,
    object_mapper: HistoryObjectRowMapper,
    item_mapper: HistoryItemRowMapper,
    app_mapper: SourceApplicationRowMapper,
    write_lock: Mutex<()>,
    changes: broadcast::Sender<HistoryChange>,
}

impl<E> DieselHistoryRepository<E> {
    pub fn new(executor: E) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            executor,
            object_mapper: HistoryObjectRowMapper,
            item_mapper: HistoryItemRowMapper,
            app_mapper: SourceApplicationRowMapper,
            write_lock: Mutex::new(()),
            changes,
        }
    }

    fn publish(&self, change: HistoryChange) {
        debug!(?change, receivers = self.changes.receiver_count(), "history changed");
        // No receivers is fine.
        let _ = self.changes.send(change);
    }

    fn find_application(
        &self,
        conn: &mut SqliteConnection,
        bundle_url: &str,
    ) -> Result<Option<SourceApplication>> {
        source_application::table
            .filter(source_application::bundle_url.eq(bundle_url))
            .select(SourceApplicationRow::as_select())
            .first(conn)
            .optional()?
            .map(|row| self.app_mapper.to_domain(&row))
            .transpose()
    }

    /// Must run inside a write transaction.
    fn lookup_or_create_application(
        &self,
        conn: &mut SqliteConnection,
        bundle_url: &str,
        should_ignore: bool,
    ) -> Result<SourceApplication> {
        if let Some(existing) = self.find_application(conn, bundle_url)? {
            return Ok(existing);
        }

        let application = SourceApplication {
            id: ApplicationId::new(),
            bundle_url: bundle_url.to_string(),
            should_ignore,
        };
        diesel::insert_into(source_application::table)
            .values(&self.app_mapper.to_row(&application)?)
            .execute(conn)?;
        debug!(bundle_url, application_id = %application.id, "source application recorded");

        Ok(application)
    }

    fn map_items(&self, rows: Vec<HistoryItemRow>) -> HashMap<String, Vec<HistoryItem>> {
        let mut grouped: HashMap<String, Vec<HistoryItem>> = HashMap::new();
        for row in rows {
            match self.item_mapper.to_domain(&row) {
                Ok(item) => grouped.entry(row.object_uuid.clone()).or_default().push(item),
                Err(err) => {
                    warn!(item_id = %row.id, object_uuid = %row.object_uuid, error = %err, "skipping undecodable history item");
                }
            }
        }
        grouped
    }

    fn load_objects(
        &self,
        conn: &mut SqliteConnection,
        only: Option<&HistoryId>,
    ) -> Result<Vec<HistoryObject>> {
        let mut objects_query = history_object::table
            .select(HistoryObjectRow::as_select())
            .order((history_object::date_added_ms.desc(), history_object::uuid.asc()))
            .into_boxed();
        let mut items_query = history_item::table
            .select(HistoryItemRow::as_select())
            .order((history_item::object_uuid.asc(), history_item::item.asc()))
            .into_boxed();
        if let Some(id) = only {
            objects_query = objects_query.filter(history_object::uuid.eq(id.as_str().to_string()));
            items_query = items_query.filter(history_item::object_uuid.eq(id.as_str().to_string()));
        }

        let object_rows: Vec<HistoryObjectRow> = objects_query.load(conn)?;
        let item_rows: Vec<HistoryItemRow> = items_query.load(conn)?;
        let applications: HashMap<String, SourceApplication> = source_application::table
            .select(SourceApplicationRow::as_select())
            .load(conn)?
            .iter()
            .map(|row| self.app_mapper.to_domain(row).map(|app| (row.id.clone(), app)))
            .collect::<Result<_>>()?;

        let mut items = self.map_items(item_rows);

        object_rows
            .into_iter()
            .map(|row| {
                let application = row
                    .application_id
                    .as_ref()
                    .and_then(|id| applications.get(id))
                    .cloned();
                let object_items = items.remove(&row.uuid).unwrap_or_default();
                self.object_mapper
                    .to_domain(&(row, application, object_items))
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl<E> HistoryRepositoryPort for DieselHistoryRepository<E>
where
    E: DbExecutor,
{
    async fn create_history(&self, new: NewHistory) -> StoreResult<CreateOutcome> {
        if new.items.is_empty() {
            return Err(HistoryStoreError::Persistence(
                "history must contain at least one item".to_string(),
            ));
        }

        let _write = self.write_lock.lock().await;
        let span = debug_span!(
            "infra.sqlite.create_history",
            table = "history_object",
            uuid = %new.id,
            items = new.items.len(),
        );
        let _enter = span.enter();

        let items = new.history_items();
        let item_rows: Vec<NewHistoryItemRow> = items
            .iter()
            .map(|item| self.item_mapper.to_row(&(item, &new.id)))
            .collect::<Result<Vec<_>>>()
            .map_err(persistence)?;

        let outcome = self
            .executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    let application = match new.application.as_deref() {
                        Some(bundle_url) => {
                            Some(self.lookup_or_create_application(conn, bundle_url, false)?)
                        }
                        None => None,
                    };

                    if application.as_ref().is_some_and(|app| app.should_ignore) {
                        return Ok(CreateOutcome::IgnoredApplication);
                    }

                    let object_row = self.object_mapper.to_row(&(&new, application.as_ref()))?;
                    diesel::insert_into(history_object::table)
                        .values(&object_row)
                        .execute(conn)?;

                    for row in &item_rows {
                        diesel::insert_into(history_item::table)
                            .values(row)
                            .execute(conn)?;
                    }

                    Ok(CreateOutcome::Created(new.id.clone()))
                })
            })
            .map_err(persistence)?;

        match &outcome {
            CreateOutcome::Created(id) => self.publish(HistoryChange::Created(id.clone())),
            CreateOutcome::IgnoredApplication => {
                debug!(bundle_url = ?new.application, "source application is ignored; nothing stored");
            }
        }

        Ok(outcome)
    }

    async fn fetch_all_sorted_by_date(&self) -> StoreResult<Vec<HistoryObject>> {
        let span = debug_span!("infra.sqlite.fetch_all_history", table = "history_object");
        let _enter = span.enter();

        self.executor
            .run(|conn| conn.transaction(|conn| self.load_objects(conn, None)))
            .map_err(query)
    }

    async fn get_history(&self, id: &HistoryId) -> StoreResult<Option<HistoryObject>> {
        let span = debug_span!("infra.sqlite.get_history", table = "history_object", uuid = %id);
        let _enter = span.enter();

        self.executor
            .run(|conn| conn.transaction(|conn| self.load_objects(conn, Some(id))))
            .map(|objects| objects.into_iter().next())
            .map_err(query)
    }

    async fn delete_history(&self, id: &HistoryId) -> StoreResult<bool> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!("infra.sqlite.delete_history", table = "history_object", uuid = %id);
        let _enter = span.enter();

        let uuid = id.as_str().to_string();
        let removed = self
            .executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    diesel::delete(history_item::table)
                        .filter(history_item::object_uuid.eq(&uuid))
                        .execute(conn)?;

                    Ok(diesel::delete(history_object::table)
                        .filter(history_object::uuid.eq(&uuid))
                        .execute(conn)?)
                })
            })
            .map_err(persistence)?;

        if removed > 0 {
            self.publish(HistoryChange::Deleted(id.clone()));
        }
        Ok(removed > 0)
    }

    async fn erase_history(&self) -> StoreResult<u64> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!("infra.sqlite.erase_history", table = "history_object");
        let _enter = span.enter();

        let removed = self
            .executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    diesel::delete(history_item::table).execute(conn)?;
                    Ok(diesel::delete(history_object::table).execute(conn)?)
                })
            })
            .map_err(persistence)?;

        self.publish(HistoryChange::Erased);
        Ok(removed as u64)
    }

    async fn delete_all_before(&self, cutoff_ms: i64) -> StoreResult<u64> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!(
            "infra.sqlite.delete_history_before",
            table = "history_object",
            cutoff_ms,
        );
        let _enter = span.enter();

        let removed = self
            .executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    let expired = history_object::table
                        .filter(history_object::date_added_ms.lt(cutoff_ms))
                        .select(history_object::uuid);

                    diesel::delete(history_item::table)
                        .filter(history_item::object_uuid.eq_any(expired))
                        .execute(conn)?;

                    Ok(diesel::delete(history_object::table)
                        .filter(history_object::date_added_ms.lt(cutoff_ms))
                        .execute(conn)?)
                })
            })
            .map_err(persistence)? as u64;

        if removed > 0 {
            self.publish(HistoryChange::Pruned { removed });
        }
        Ok(removed)
    }

    async fn toggle_favorite(&self, id: &HistoryId) -> StoreResult<Option<bool>> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!("infra.sqlite.toggle_favorite", table = "history_object", uuid = %id);
        let _enter = span.enter();

        let uuid = id.as_str().to_string();
        let toggled = self
            .executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    let current: Option<bool> = history_object::table
                        .filter(history_object::uuid.eq(&uuid))
                        .select(history_object::is_favorited)
                        .first(conn)
                        .optional()?;

                    let Some(current) = current else {
                        return Ok(None);
                    };

                    diesel::update(history_object::table.filter(history_object::uuid.eq(&uuid)))
                        .set(history_object::is_favorited.eq(!current))
                        .execute(conn)?;

                    Ok(Some(!current))
                })
            })
            .map_err(persistence)?;

        if toggled.is_some() {
            self.publish(HistoryChange::FavoriteToggled(id.clone()));
        }
        Ok(toggled)
    }

    fn subscribe(&self) -> broadcast::Receiver<HistoryChange> {
        self.changes.subscribe()
    }
}

#[async_trait::async_trait]
impl<E> ApplicationRepositoryPort for DieselHistoryRepository<E>
where
    E: DbExecutor,
{
    async fn get_application(&self, bundle_url: &str) -> StoreResult<Option<SourceApplication>> {
        self.executor
            .run(|conn| self.find_application(conn, bundle_url))
            .map_err(query)
    }

    async fn create_application(
        &self,
        bundle_url: &str,
        should_ignore: bool,
    ) -> StoreResult<SourceApplication> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!(
            "infra.sqlite.create_application",
            table = "source_application",
            bundle_url,
        );
        let _enter = span.enter();

        self.executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    self.lookup_or_create_application(conn, bundle_url, should_ignore)
                })
            })
            .map_err(persistence)
    }

    async fn set_ignored(
        &self,
        id: &ApplicationId,
        should_ignore: bool,
    ) -> StoreResult<Option<SourceApplication>> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!(
            "infra.sqlite.set_application_ignored",
            table = "source_application",
            application_id = %id,
            should_ignore,
        );
        let _enter = span.enter();

        let app_id = id.as_str().to_string();
        self.executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    let updated = diesel::update(
                        source_application::table.filter(source_application::id.eq(&app_id)),
                    )
                    .set(source_application::should_ignore.eq(should_ignore))
                    .execute(conn)?;
                    if updated == 0 {
                        return Ok(None);
                    }

                    let row: SourceApplicationRow = source_application::table
                        .filter(source_application::id.eq(&app_id))
                        .select(SourceApplicationRow::as_select())
                        .first(conn)?;
                    Ok(Some(self.app_mapper.to_domain(&row)?))
                })
            })
            .map_err(persistence)
    }

    async fn set_ignored_many(
        &self,
        ids: &[ApplicationId],
        should_ignore: bool,
    ) -> StoreResult<u64> {
        let _write = self.write_lock.lock().await;
        let span = debug_span!(
            "infra.sqlite.set_applications_ignored",
            table = "source_application",
            count = ids.len(),
            should_ignore,
        );
        let _enter = span.enter();

        let app_ids: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        self.executor
            .run(|conn| {
                conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
                    Ok(diesel::update(
                        source_application::table.filter(source_application::id.eq_any(&app_ids)),
                    )
                    .set(source_application::should_ignore.eq(should_ignore))
                    .execute(conn)? as u64)
                })
            })
            .map_err(persistence)
    }

    async fn list_applications(&self) -> StoreResult<Vec<SourceApplication>> {
        self.executor
            .run(|conn| {
                source_application::table
                    .select(SourceApplicationRow::as_select())
                    .order(source_application::bundle_url.asc())
                    .load(conn)?
                    .iter()
                    .map(|row| self.app_mapper.to_domain(row))
                    .collect()
            })
            .map_err(query)
    }

    async fn list_ignored_applications(&self) -> StoreResult<Vec<SourceApplication>> {
        self.executor
            .run(|conn| {
                source_application::table
                    .filter(source_application::should_ignore.eq(true))
                    .select(SourceApplicationRow::as_select())
                    .order(source_application::bundle_url.asc())
                    .load(conn)?
                    .iter()
                    .map(|row| self.app_mapper.to_domain(row))
                    .collect()
            })
            .map_err(query)
    }
}
