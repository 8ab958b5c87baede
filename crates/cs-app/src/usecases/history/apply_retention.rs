use std::sync::Arc;

use anyhow::Result;
use cs_core::history::ErasureTarget;
use cs_core::ports::{ClockPort, HistoryRepositoryPort};
use tracing::{debug, info};

/// Deletes every history object older than the retention target allows.
pub struct ApplyRetention {
    history: Arc<dyn HistoryRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl ApplyRetention {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { history, clock }
    }

    #[tracing::instrument(name = "usecase.apply_retention.execute", skip(self))]
    pub async fn execute(&self, target: ErasureTarget) -> Result<u64> {
        if target.is_never() {
            debug!("retention disabled");
            return Ok(0);
        }

        let cutoff_ms = target.cutoff_ms(self.clock.now_ms());
        let removed = self.history.delete_all_before(cutoff_ms).await?;
        info!(removed, cutoff_ms, "retention applied");
        Ok(removed)
    }

    /// Same as [`execute`](Self::execute) for a persisted selector index.
    pub async fn execute_index(&self, index: i64) -> Result<u64> {
        self.execute(ErasureTarget::from_index(index)).await
    }
}
