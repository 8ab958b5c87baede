use std::sync::Arc;

use anyhow::Result;
use cs_core::history::HistoryObject;
use cs_core::ids::HistoryId;
use cs_core::ports::HistoryRepositoryPort;

/// Reads the captured history, newest first.
pub struct ListHistory {
    history: Arc<dyn HistoryRepositoryPort>,
}

impl ListHistory {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.list_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<HistoryObject>> {
        Ok(self.history.fetch_all_sorted_by_date().await?)
    }

    #[tracing::instrument(name = "usecase.list_history.get", skip(self, id), fields(history_id = %id))]
    pub async fn get(&self, id: &HistoryId) -> Result<Option<HistoryObject>> {
        Ok(self.history.get_history(id).await?)
    }
}
