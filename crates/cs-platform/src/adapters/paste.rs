use async_trait::async_trait;
use cs_core::ports::PasteTriggerPort;

/// Paste hook for headless runs: there is no focused application to paste into.
pub struct NoopPasteTrigger;

#[async_trait]
impl PasteTriggerPort for NoopPasteTrigger {
    async fn trigger_paste(&self) -> anyhow::Result<()> {
        tracing::debug!("paste requested; no paste target in headless mode");
        Ok(())
    }
}
