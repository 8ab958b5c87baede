use async_trait::async_trait;

/// Hook that synthesizes a paste into the previously focused application.
#[async_trait]
pub trait PasteTriggerPort: Send + Sync {
    async fn trigger_paste(&self) -> anyhow::Result<()>;
}
