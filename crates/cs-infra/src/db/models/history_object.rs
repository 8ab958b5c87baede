use crate::db::schema::history_object;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = history_object)]
pub struct HistoryObjectRow {
    pub uuid: String,
    pub date_added_ms: i64,
    pub is_favorited: bool,
    pub application_id: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = history_object)]
pub struct NewHistoryObjectRow {
    pub uuid: String,
    pub date_added_ms: i64,
    pub is_favorited: bool,
    pub application_id: Option<String>,
}
