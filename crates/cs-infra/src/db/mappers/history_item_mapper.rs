use anyhow::{Context, Result};
use cs_core::history::HistoryItem;
use cs_core::ids::{HistoryId, HistoryItemId};

use crate::codec::item_data;
use crate::db::models::{HistoryItemRow, NewHistoryItemRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct HistoryItemRowMapper;

impl<'a> InsertMapper<(&'a HistoryItem, &'a HistoryId), NewHistoryItemRow> for HistoryItemRowMapper {
    fn to_row(&self, (item, object_id): &(&'a HistoryItem, &'a HistoryId)) -> Result<NewHistoryItemRow> {
        Ok(NewHistoryItemRow {
            id: item.id.as_str().to_string(),
            object_uuid: object_id.as_str().to_string(),
            item: i32::try_from(item.item).context("item ordinal out of range")?,
            types: item_data::encode_types(&item.types)?,
            data: item_data::encode_data(&item.types, &item.data)?,
        })
    }
}

impl RowMapper<HistoryItemRow, HistoryItem> for HistoryItemRowMapper {
    fn to_domain(&self, row: &HistoryItemRow) -> Result<HistoryItem> {
        let types = item_data::decode_types(&row.types)?;
        let data = item_data::decode_data(&types, &row.data)?;

        Ok(HistoryItem {
            id: HistoryItemId::from(row.id.clone()),
            item: u32::try_from(row.item).context("negative item ordinal")?,
            types,
            data,
        })
    }
}
