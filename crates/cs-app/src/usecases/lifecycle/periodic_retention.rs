use std::sync::Arc;
use std::time::Duration;

use cs_core::ports::SettingsPort;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn, Instrument};

use crate::usecases::history::ApplyRetention;

/// Roughly thirty years; first-run deadline used when `interval` overflows.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Spawns a task applying the configured retention target every `interval`.
///
/// The target is re-read from settings on each tick so changes apply without
/// a restart. The first run happens one interval after spawning. Abort the
/// returned handle to stop it.
pub fn spawn_periodic_retention(
    retention: ApplyRetention,
    settings: Arc<dyn SettingsPort>,
    interval: Duration,
) -> JoinHandle<()> {
    let span = tracing::info_span!("usecase.periodic_retention", interval_ms = interval.as_millis() as u64);

    tokio::spawn(
        async move {
            let now = tokio::time::Instant::now();
            let start = now.checked_add(interval).unwrap_or_else(|| now + FAR_FUTURE);
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let target = match settings.load().await {
                    Ok(settings) => settings.retention.erasure_target,
                    Err(err) => {
                        warn!(error = %err, "failed to load settings, skipping retention run");
                        continue;
                    }
                };

                match retention.execute(target).await {
                    Ok(removed) => debug!(removed, "periodic retention run"),
                    Err(err) => warn!(error = %err, "periodic retention failed"),
                }
            }
        }
        .instrument(span),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::*;
    use cs_core::history::NewHistory;
    use cs_core::ports::HistoryRepositoryPort;
    use cs_core::{ErasureTarget, Settings};

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    const NOW: i64 = 1_700_000_000_000;

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn prunes_on_each_interval() {
        let history = Arc::new(MemoryHistory::default());
        let clock = Arc::new(FixedClock::at(NOW));
        let mut settings = Settings::default();
        settings.retention.erasure_target = ErasureTarget::Day;

        history
            .create_history(NewHistory::new(NOW - 2 * DAY_MS, vec![text("old")]))
            .await
            .unwrap();

        let handle = spawn_periodic_retention(
            ApplyRetention::new(history.clone(), clock.clone()),
            Arc::new(MemorySettings::with(settings)),
            Duration::from_secs(60),
        );

        settle().await;
        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;
        assert_eq!(history.dates().len(), 1, "no run before the first interval");

        tokio::time::advance(Duration::from_secs(31)).await;
        settle().await;
        assert!(history.dates().is_empty());

        history
            .create_history(NewHistory::new(NOW, vec![text("fresh")]))
            .await
            .unwrap();
        clock.0.store(NOW + 3 * DAY_MS, std::sync::atomic::Ordering::SeqCst);

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert!(history.dates().is_empty());

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn huge_interval_keeps_the_task_alive() {
        let history = Arc::new(MemoryHistory::default());
        let mut settings = Settings::default();
        settings.retention.erasure_target = ErasureTarget::Day;
        history
            .create_history(NewHistory::new(NOW - 2 * DAY_MS, vec![text("old")]))
            .await
            .unwrap();

        let handle = spawn_periodic_retention(
            ApplyRetention::new(history.clone(), Arc::new(FixedClock::at(NOW))),
            Arc::new(MemorySettings::with(settings)),
            Duration::from_secs(u64::MAX),
        );

        settle().await;
        tokio::time::advance(Duration::from_secs(3600)).await;
        settle().await;

        assert!(!handle.is_finished());
        assert_eq!(history.dates().len(), 1);
        handle.abort();
    }
}
