//! Clipboard monitor behavior under paused tokio time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use cs_core::clipboard::RepresentationSet;
use cs_core::ports::{ClipboardChangeHandler, MonitorControlPort, SystemClipboardPort};
use cs_platform::clipboard::InMemoryClipboard;
use cs_platform::runtime::ClipboardMonitor;
use tokio::time::advance;

const TICK: Duration = Duration::from_millis(250);

#[derive(Default)]
struct RecordingHandler {
    batches: Mutex<Vec<Vec<RepresentationSet>>>,
    fail: bool,
}

impl RecordingHandler {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }
}

#[async_trait]
impl ClipboardChangeHandler for RecordingHandler {
    async fn on_clipboard_changed(&self, items: Vec<RepresentationSet>) -> Result<()> {
        self.batches.lock().unwrap().push(items);
        if self.fail {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }
}

fn text(value: &str) -> RepresentationSet {
    RepresentationSet::from_pairs([("public.utf8-plain-text", value.as_bytes().to_vec())]).unwrap()
}

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

async fn step(duration: Duration) {
    advance(duration).await;
    settle().await;
}

fn setup(
    handler: RecordingHandler,
) -> (Arc<InMemoryClipboard>, Arc<RecordingHandler>, ClipboardMonitor) {
    let clipboard = Arc::new(InMemoryClipboard::with_change_count(5));
    let handler = Arc::new(handler);
    let monitor = ClipboardMonitor::new(clipboard.clone(), handler.clone(), TICK).unwrap();
    (clipboard, handler, monitor)
}

#[tokio::test]
async fn counter_transition_triggers_one_capture() {
    tokio::time::pause();
    let (clipboard, handler, monitor) = setup(RecordingHandler::default());
    settle().await;
    assert!(monitor.is_running());
    assert_eq!(handler.count(), 0, "startup contents are not captured");

    clipboard.write_items(&[text("hello")]).unwrap();
    assert_eq!(clipboard.change_count().unwrap(), 6);
    step(TICK).await;
    assert_eq!(handler.count(), 1);
    assert_eq!(handler.batches.lock().unwrap()[0], vec![text("hello")]);

    step(TICK * 4).await;
    assert_eq!(handler.count(), 1, "unchanged counter is a no-op");
}

#[tokio::test]
async fn resume_before_pause_elapses_does_not_double_start() {
    tokio::time::pause();
    let (clipboard, handler, monitor) = setup(RecordingHandler::default());
    settle().await;

    monitor.pause(Duration::from_secs(5)).await.unwrap();
    let status = monitor.status();
    assert!(status.paused);
    assert_eq!(status.pause_duration, Some(Duration::from_secs(5)));

    clipboard.write_items(&[text("while paused")]).unwrap();
    step(Duration::from_secs(2)).await;
    assert_eq!(handler.count(), 0);

    monitor.resume().await.unwrap();
    assert!(!monitor.status().paused);
    assert_eq!(monitor.status().pause_duration, None);
    step(TICK).await;
    assert_eq!(handler.count(), 1, "polling resumes immediately");

    // If the original t=5s timer fired it would restart the stopped monitor.
    monitor.stop().await.unwrap();
    clipboard.write_items(&[text("after stop")]).unwrap();
    step(Duration::from_secs(4)).await;
    assert!(!monitor.is_running());
    assert_eq!(handler.count(), 1);
}

#[tokio::test]
async fn pause_auto_resumes_after_duration() {
    tokio::time::pause();
    let (clipboard, handler, monitor) = setup(RecordingHandler::default());
    settle().await;

    monitor.pause_now(Duration::from_secs(1));
    clipboard.write_items(&[text("x")]).unwrap();
    step(Duration::from_millis(900)).await;
    assert!(!monitor.is_running());

    step(Duration::from_millis(200)).await;
    assert!(monitor.is_running());
    step(TICK).await;
    assert_eq!(handler.count(), 1);
}

#[tokio::test]
async fn unbounded_pause_stays_paused_until_resumed() {
    tokio::time::pause();
    let (clipboard, handler, monitor) = setup(RecordingHandler::default());
    settle().await;

    monitor.pause(Duration::MAX).await.unwrap();
    assert_eq!(monitor.status().pause_duration, Some(Duration::MAX));
    assert!(!monitor.is_running());

    clipboard.write_items(&[text("while paused")]).unwrap();
    step(Duration::from_secs(3600)).await;
    assert!(!monitor.is_running());
    assert_eq!(handler.count(), 0);

    monitor.resume().await.unwrap();
    assert!(monitor.is_running());
    assert!(!monitor.status().paused);
}

#[tokio::test]
async fn last_pause_wins() {
    tokio::time::pause();
    let (_clipboard, _handler, monitor) = setup(RecordingHandler::default());
    settle().await;

    monitor.pause_now(Duration::from_secs(1));
    monitor.pause_now(Duration::from_secs(10));
    step(Duration::from_secs(2)).await;
    assert!(!monitor.is_running());
    assert_eq!(monitor.current_status().pause_duration, Some(Duration::from_secs(10)));

    monitor.pause_now(Duration::from_secs(1));
    step(Duration::from_millis(1_100)).await;
    assert!(monitor.is_running());
}

#[tokio::test]
async fn start_and_stop_are_idempotent() {
    tokio::time::pause();
    let (clipboard, handler, monitor) = setup(RecordingHandler::default());
    settle().await;

    monitor.start_now();
    monitor.start_now();
    clipboard.write_items(&[text("once")]).unwrap();
    step(TICK).await;
    assert_eq!(handler.count(), 1, "a second start must not spawn a second loop");

    monitor.stop_now();
    monitor.stop_now();
    let status = monitor.current_status();
    assert!(status.paused);
    assert_eq!(status.pause_duration, None);

    clipboard.write_items(&[text("missed")]).unwrap();
    step(TICK * 4).await;
    assert_eq!(handler.count(), 1);

    // Restarting picks up the change that happened while stopped.
    monitor.start_now();
    step(TICK).await;
    assert_eq!(handler.count(), 2);
}

#[tokio::test]
async fn stop_cancels_pending_auto_resume() {
    tokio::time::pause();
    let (_clipboard, _handler, monitor) = setup(RecordingHandler::default());
    settle().await;

    monitor.pause_now(Duration::from_secs(2));
    monitor.stop_now();
    step(Duration::from_secs(5)).await;

    assert!(!monitor.is_running());
    assert_eq!(monitor.current_status().pause_duration, None);
}

#[tokio::test]
async fn failures_never_stop_polling() {
    tokio::time::pause();
    let (clipboard, handler, monitor) = setup(RecordingHandler::failing());
    settle().await;

    clipboard.write_items(&[text("a")]).unwrap();
    step(TICK).await;
    clipboard.set_fail_reads(true);
    step(TICK * 2).await;
    clipboard.set_fail_reads(false);
    clipboard.write_items(&[text("b")]).unwrap();
    step(TICK).await;

    assert!(monitor.is_running());
    assert_eq!(handler.count(), 2);
}

#[tokio::test]
async fn status_stream_reports_transitions() {
    tokio::time::pause();
    let (_clipboard, _handler, monitor) = setup(RecordingHandler::default());
    let mut status = monitor.subscribe_status();
    assert!(!status.borrow_and_update().paused);

    monitor.pause_now(Duration::from_secs(3));
    status.changed().await.unwrap();
    assert_eq!(
        *status.borrow_and_update(),
        cs_core::ports::MonitorStatus {
            paused: true,
            pause_duration: Some(Duration::from_secs(3)),
        }
    );

    monitor.resume_now();
    status.changed().await.unwrap();
    assert!(!status.borrow().paused);
}
