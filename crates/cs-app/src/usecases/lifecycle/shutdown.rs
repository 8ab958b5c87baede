use std::sync::Arc;

use anyhow::Result;
use cs_core::ports::{HistoryRepositoryPort, SettingsPort};
use cs_core::settings::Settings;
use tracing::{info, info_span, warn, Instrument};

use crate::usecases::history::ApplyRetention;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownAction {
    Erased(u64),
    Pruned(u64),
    Nothing,
}

/// Retention applied once when the process quits.
///
/// `erase_on_quit` wins over the age-based target.
pub struct ShutdownRetention {
    history: Arc<dyn HistoryRepositoryPort>,
    settings: Arc<dyn SettingsPort>,
    retention: ApplyRetention,
}

impl ShutdownRetention {
    pub fn new(
        history: Arc<dyn HistoryRepositoryPort>,
        settings: Arc<dyn SettingsPort>,
        retention: ApplyRetention,
    ) -> Self {
        Self {
            history,
            settings,
            retention,
        }
    }

    pub async fn execute(&self) -> Result<ShutdownAction> {
        async move {
            let settings = self.settings.load().await.unwrap_or_else(|err| {
                warn!(error = %err, "failed to load settings, using defaults at shutdown");
                Settings::default()
            });

            let action = if settings.retention.erase_on_quit {
                ShutdownAction::Erased(self.history.erase_history().await?)
            } else if !settings.retention.erasure_target.is_never() {
                ShutdownAction::Pruned(
                    self.retention
                        .execute(settings.retention.erasure_target)
                        .await?,
                )
            } else {
                ShutdownAction::Nothing
            };

            info!(?action, "shutdown retention done");
            Ok(action)
        }
        .instrument(info_span!("usecase.shutdown_retention.execute"))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::*;
    use cs_core::history::NewHistory;
    use cs_core::ErasureTarget;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    const NOW: i64 = 1_700_000_000_000;

    async fn run(settings: Settings) -> (ShutdownAction, Arc<MemoryHistory>) {
        let history = Arc::new(MemoryHistory::default());
        for age_days in [0, 3] {
            history
                .create_history(NewHistory::new(NOW - age_days * DAY_MS, vec![text("x")]))
                .await
                .unwrap();
        }
        let shutdown = ShutdownRetention::new(
            history.clone(),
            Arc::new(MemorySettings::with(settings)),
            ApplyRetention::new(history.clone(), Arc::new(FixedClock::at(NOW))),
        );
        (shutdown.execute().await.unwrap(), history)
    }

    #[tokio::test]
    async fn erase_on_quit_wins() {
        let mut settings = Settings::default();
        settings.retention.erase_on_quit = true;
        settings.retention.erasure_target = ErasureTarget::Day;

        let (action, history) = run(settings).await;

        assert_eq!(action, ShutdownAction::Erased(2));
        assert!(history.dates().is_empty());
    }

    #[tokio::test]
    async fn target_prunes_old_objects() {
        let mut settings = Settings::default();
        settings.retention.erasure_target = ErasureTarget::Day;

        let (action, history) = run(settings).await;

        assert_eq!(action, ShutdownAction::Pruned(1));
        assert_eq!(history.dates(), vec![NOW]);
    }

    #[tokio::test]
    async fn defaults_keep_everything() {
        let (action, history) = run(Settings::default()).await;

        assert_eq!(action, ShutdownAction::Nothing);
        assert_eq!(history.dates().len(), 2);
    }
}
