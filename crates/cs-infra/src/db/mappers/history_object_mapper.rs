use anyhow::Result;
use cs_core::history::{HistoryItem, HistoryObject, NewHistory, SourceApplication};
use cs_core::ids::HistoryId;

use crate::db::models::{HistoryObjectRow, NewHistoryObjectRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct HistoryObjectRowMapper;

impl<'a> InsertMapper<(&'a NewHistory, Option<&'a SourceApplication>), NewHistoryObjectRow>
    for HistoryObjectRowMapper
{
    fn to_row(
        &self,
        (new, application): &(&'a NewHistory, Option<&'a SourceApplication>),
    ) -> Result<NewHistoryObjectRow> {
        Ok(NewHistoryObjectRow {
            uuid: new.id.as_str().to_string(),
            date_added_ms: new.date_added_ms,
            is_favorited: false,
            application_id: application.map(|app| app.id.as_str().to_string()),
        })
    }
}

/// Assembles an object from its row plus the already-mapped application and
/// items (items must be in ordinal order).
impl RowMapper<(HistoryObjectRow, Option<SourceApplication>, Vec<HistoryItem>), HistoryObject>
    for HistoryObjectRowMapper
{
    fn to_domain(
        &self,
        (row, application, items): &(HistoryObjectRow, Option<SourceApplication>, Vec<HistoryItem>),
    ) -> Result<HistoryObject> {
        Ok(HistoryObject {
            id: HistoryId::from(row.uuid.clone()),
            date_added_ms: row.date_added_ms,
            is_favorited: row.is_favorited,
            application: application.clone(),
            items: items.clone(),
        })
    }
}
