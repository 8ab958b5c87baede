use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::HistoryRepositoryPort;
use tracing::info;

/// Removes every history object, favorites included.
pub struct EraseHistory {
    history: Arc<dyn HistoryRepositoryPort>,
}

impl EraseHistory {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.erase_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<u64> {
        let removed = self.history.erase_history().await?;
        info!(removed, "history erased");
        Ok(removed)
    }
}
