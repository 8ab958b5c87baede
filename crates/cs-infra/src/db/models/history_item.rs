use crate::db::schema::history_item;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = history_item)]
pub struct HistoryItemRow {
    pub id: String,
    pub object_uuid: String,
    pub item: i32,
    /// JSON array of type identifiers in stored order.
    pub types: String,
    /// bincode-encoded `(type, bytes)` pairs, see `codec::item_data`.
    pub data: Vec<u8>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = history_item)]
pub struct NewHistoryItemRow {
    pub id: String,
    pub object_uuid: String,
    pub item: i32,
    pub types: String,
    pub data: Vec<u8>,
}
