use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use super::errors::MonitorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonitorStatus {
    pub paused: bool,
    /// Length of the current pause; `None` while running or after `stop()`.
    pub pause_duration: Option<Duration>,
}

/// Lifecycle control of the clipboard monitor.
///
/// # Behavior
/// - `start()` and `stop()` are idempotent.
/// - `pause(d)` replaces any pending auto-resume; the last call wins.
/// - `resume()` cancels a pending auto-resume and starts immediately.
#[async_trait]
pub trait MonitorControlPort: Send + Sync {
    async fn start(&self) -> Result<(), MonitorError>;
    async fn stop(&self) -> Result<(), MonitorError>;
    async fn pause(&self, duration: Duration) -> Result<(), MonitorError>;
    async fn resume(&self) -> Result<(), MonitorError>;
    fn status(&self) -> MonitorStatus;
    fn subscribe_status(&self) -> watch::Receiver<MonitorStatus>;
}
