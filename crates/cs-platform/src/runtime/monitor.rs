//! Polling clipboard monitor.
//!
//! Reads the clipboard change counter on a fixed interval. A counter that
//! differs from the last observed value is the only signal of a change; the
//! items are then read and handed to the [`ClipboardChangeHandler`] on a
//! separate task so the tick never waits for persistence.
//!
//! ```text
//! Running --stop()--> Paused (no duration)
//! Running --pause(d)--> Paused (d) --after d / resume()--> Running
//! ```
//!
//! The polling loop and the auto-resume timer are two independently
//! abortable tasks. The auto-resume slot carries a generation number: any
//! `stop`, `pause` or `resume` bumps it, so a timer that already woke up
//! before being aborted still cannot start the monitor a second time.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use cs_core::ports::{
    ClipboardChangeHandler, MonitorControlPort, MonitorError, MonitorStatus, SystemClipboardPort,
};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, info, info_span, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Default)]
struct MonitorState {
    poll: Option<AbortHandle>,
    resume: Option<AbortHandle>,
    resume_generation: u64,
    pause_duration: Option<Duration>,
}

struct MonitorInner {
    clipboard: Arc<dyn SystemClipboardPort>,
    handler: Arc<dyn ClipboardChangeHandler>,
    poll_interval: Duration,
    runtime: Handle,
    last_change_count: AtomicI64,
    state: Mutex<MonitorState>,
    status_tx: watch::Sender<MonitorStatus>,
}

pub struct ClipboardMonitor {
    inner: Arc<MonitorInner>,
}

/// Roughly thirty years, the same horizon tokio clamps its own sleeps to.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `now + duration`, saturating instead of overflowing for huge durations.
fn deadline_after(duration: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(duration)
        .unwrap_or_else(|| now + FAR_FUTURE)
}

impl ClipboardMonitor {
    /// Creates the monitor in the Running state.
    ///
    /// Must be called from within a tokio runtime. The change counter at
    /// construction time is taken as already observed, so whatever is on the
    /// clipboard at startup is not captured.
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        handler: Arc<dyn ClipboardChangeHandler>,
        poll_interval: Duration,
    ) -> Result<Self, MonitorError> {
        let runtime = Handle::try_current().map_err(|_| MonitorError::RuntimeUnavailable)?;

        let initial_count = clipboard.change_count().unwrap_or_else(|err| {
            warn!(error = %err, "could not read initial clipboard change count");
            0
        });

        let (status_tx, _) = watch::channel(MonitorStatus::default());
        let monitor = Self {
            inner: Arc::new(MonitorInner {
                clipboard,
                handler,
                poll_interval,
                runtime,
                last_change_count: AtomicI64::new(initial_count),
                state: Mutex::new(MonitorState::default()),
                status_tx,
            }),
        };

        monitor.start_now();
        Ok(monitor)
    }

    pub fn start_now(&self) {
        let mut state = self.inner.lock_state();
        self.inner.start_locked(&mut state);
    }

    pub fn stop_now(&self) {
        let mut state = self.inner.lock_state();
        self.inner.cancel_resume_locked(&mut state);
        self.inner.stop_polling_locked(&mut state);
        state.pause_duration = None;
        self.inner.publish_locked(&state);
        info!("clipboard monitor stopped");
    }

    pub fn pause_now(&self, duration: Duration) {
        let mut state = self.inner.lock_state();
        self.inner.cancel_resume_locked(&mut state);
        self.inner.stop_polling_locked(&mut state);
        state.pause_duration = Some(duration);

        let generation = state.resume_generation;
        let deadline = deadline_after(duration);
        let inner = Arc::clone(&self.inner);
        let task = self.inner.runtime.spawn(async move {
            sleep_until(deadline).await;
            inner.auto_resume(generation);
        });
        state.resume = Some(task.abort_handle());

        self.inner.publish_locked(&state);
        info!(duration_ms = duration.as_millis() as u64, "clipboard monitor paused");
    }

    pub fn resume_now(&self) {
        let mut state = self.inner.lock_state();
        self.inner.cancel_resume_locked(&mut state);
        state.pause_duration = None;
        self.inner.start_locked(&mut state);
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock_state().poll.is_some()
    }

    pub fn current_status(&self) -> MonitorStatus {
        *self.inner.status_tx.borrow()
    }

    pub fn watch_status(&self) -> watch::Receiver<MonitorStatus> {
        self.inner.status_tx.subscribe()
    }
}

impl Drop for ClipboardMonitor {
    fn drop(&mut self) {
        let mut state = self.inner.lock_state();
        self.inner.cancel_resume_locked(&mut state);
        self.inner.stop_polling_locked(&mut state);
    }
}

impl MonitorInner {
    fn lock_state(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish_locked(&self, state: &MonitorState) {
        self.status_tx.send_replace(MonitorStatus {
            paused: state.poll.is_none(),
            pause_duration: state.pause_duration,
        });
    }

    fn cancel_resume_locked(&self, state: &mut MonitorState) {
        state.resume_generation = state.resume_generation.wrapping_add(1);
        if let Some(handle) = state.resume.take() {
            handle.abort();
        }
    }

    fn stop_polling_locked(&self, state: &mut MonitorState) {
        if let Some(handle) = state.poll.take() {
            handle.abort();
        }
    }

    fn start_locked(self: &Arc<Self>, state: &mut MonitorState) {
        if state.poll.is_some() {
            return;
        }

        let inner = Arc::clone(self);
        let task = self.runtime.spawn(async move {
            let mut ticker = interval(inner.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                inner.tick();
            }
        });
        state.poll = Some(task.abort_handle());
        state.pause_duration = None;

        self.publish_locked(state);
        info!(
            interval_ms = self.poll_interval.as_millis() as u64,
            "clipboard monitor started"
        );
    }

    fn auto_resume(self: &Arc<Self>, generation: u64) {
        let mut state = self.lock_state();
        if state.resume_generation != generation {
            debug!("stale auto-resume ignored");
            return;
        }
        state.resume = None;
        debug!("pause elapsed; resuming clipboard monitor");
        self.start_locked(&mut state);
    }

    fn tick(&self) {
        let span = info_span!("platform.monitor.tick");
        let _enter = span.enter();

        let count = match self.clipboard.change_count() {
            Ok(count) => count,
            Err(err) => {
                warn!(error = %err, "failed to read clipboard change count");
                return;
            }
        };

        let previous = self.last_change_count.swap(count, Ordering::AcqRel);
        if previous == count {
            return;
        }
        debug!(previous, count, "clipboard change detected");

        let items = match self.clipboard.read_items() {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "failed to read clipboard items");
                return;
            }
        };

        let handler = Arc::clone(&self.handler);
        self.runtime.spawn(async move {
            if let Err(err) = handler.on_clipboard_changed(items).await {
                warn!(error = %err, "clipboard capture failed");
            }
        });
    }
}

#[async_trait]
impl MonitorControlPort for ClipboardMonitor {
    async fn start(&self) -> Result<(), MonitorError> {
        self.start_now();
        Ok(())
    }

    async fn stop(&self) -> Result<(), MonitorError> {
        self.stop_now();
        Ok(())
    }

    async fn pause(&self, duration: Duration) -> Result<(), MonitorError> {
        self.pause_now(duration);
        Ok(())
    }

    async fn resume(&self) -> Result<(), MonitorError> {
        self.resume_now();
        Ok(())
    }

    fn status(&self) -> MonitorStatus {
        self.current_status()
    }

    fn subscribe_status(&self) -> watch::Receiver<MonitorStatus> {
        self.watch_status()
    }
}
