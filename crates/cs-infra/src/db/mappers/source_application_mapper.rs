use anyhow::Result;
use cs_core::history::SourceApplication;
use cs_core::ids::ApplicationId;

use crate::db::models::{NewSourceApplicationRow, SourceApplicationRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct SourceApplicationRowMapper;

impl InsertMapper<SourceApplication, NewSourceApplicationRow> for SourceApplicationRowMapper {
    fn to_row(&self, domain: &SourceApplication) -> Result<NewSourceApplicationRow> {
        Ok(NewSourceApplicationRow {
            id: domain.id.as_str().to_string(),
            bundle_url: domain.bundle_url.clone(),
            should_ignore: domain.should_ignore,
        })
    }
}

impl RowMapper<SourceApplicationRow, SourceApplication> for SourceApplicationRowMapper {
    fn to_domain(&self, row: &SourceApplicationRow) -> Result<SourceApplication> {
        Ok(SourceApplication {
            id: ApplicationId::from(row.id.clone()),
            bundle_url: row.bundle_url.clone(),
            should_ignore: row.should_ignore,
        })
    }
}
