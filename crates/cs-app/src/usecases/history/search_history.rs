use std::sync::Arc;

use anyhow::Result;
use cs_core::history::{filter, HistoryObject};
use cs_core::ports::HistoryRepositoryPort;
use tracing::{debug, info_span, Instrument};

/// Filters the history by a free-text query.
pub struct SearchHistory {
    history: Arc<dyn HistoryRepositoryPort>,
}

impl SearchHistory {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history }
    }

    /// `None` when the query is blank, meaning "show everything".
    pub async fn execute(&self, query: &str) -> Result<Option<Vec<HistoryObject>>> {
        async move {
            let objects = self.history.fetch_all_sorted_by_date().await?;
            let matches = filter(query, &objects);
            debug!(
                total = objects.len(),
                matched = matches.as_ref().map(Vec::len),
                "history filtered"
            );
            Ok(matches)
        }
        .instrument(info_span!("usecase.search_history.execute"))
        .await
    }
}
