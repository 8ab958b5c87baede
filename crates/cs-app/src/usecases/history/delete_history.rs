use std::sync::Arc;

use anyhow::Result;
use cs_core::ids::HistoryId;
use cs_core::ports::HistoryRepositoryPort;
use tracing::info;

pub struct DeleteHistory {
    history: Arc<dyn HistoryRepositoryPort>,
}

impl DeleteHistory {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history }
    }

    /// Deleting an unknown id is a no-op returning `false`.
    #[tracing::instrument(name = "usecase.delete_history.execute", skip(self, id), fields(history_id = %id))]
    pub async fn execute(&self, id: &HistoryId) -> Result<bool> {
        let removed = self.history.delete_history(id).await?;
        if removed {
            info!("history object deleted");
        }
        Ok(removed)
    }
}
