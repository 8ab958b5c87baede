use std::sync::Arc;

use anyhow::Result;
use cs_core::ids::HistoryId;
use cs_core::ports::HistoryRepositoryPort;

pub struct ToggleFavorite {
    history: Arc<dyn HistoryRepositoryPort>,
}

impl ToggleFavorite {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history }
    }

    /// New favorite state, or `None` for an unknown id.
    #[tracing::instrument(name = "usecase.toggle_favorite.execute", skip(self, id), fields(history_id = %id))]
    pub async fn execute(&self, id: &HistoryId) -> Result<Option<bool>> {
        Ok(self.history.toggle_favorite(id).await?)
    }
}
