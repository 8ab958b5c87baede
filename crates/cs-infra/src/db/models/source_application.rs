use crate::db::schema::source_application;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = source_application)]
pub struct SourceApplicationRow {
    pub id: String,
    pub bundle_url: String,
    pub should_ignore: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = source_application)]
pub struct NewSourceApplicationRow {
    pub id: String,
    pub bundle_url: String,
    pub should_ignore: bool,
}
