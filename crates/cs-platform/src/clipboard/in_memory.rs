use std::sync::{Mutex, PoisonError};

use anyhow::{bail, Result};
use cs_core::clipboard::RepresentationSet;
use cs_core::ports::SystemClipboardPort;

#[derive(Debug, Default)]
struct State {
    items: Vec<RepresentationSet>,
    change_count: i64,
    fail_reads: bool,
}

/// Process-local clipboard with a real change counter. Used headless and in
/// tests; supports multiple items.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    state: Mutex<State>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_change_count(change_count: i64) -> Self {
        Self {
            state: Mutex::new(State {
                change_count,
                ..State::default()
            }),
        }
    }

    /// Makes subsequent counter reads and item reads fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    pub fn items(&self) -> Vec<RepresentationSet> {
        self.lock().items.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn change_count(&self) -> Result<i64> {
        let state = self.lock();
        if state.fail_reads {
            bail!("clipboard unavailable");
        }
        Ok(state.change_count)
    }

    fn read_items(&self) -> Result<Vec<RepresentationSet>> {
        let state = self.lock();
        if state.fail_reads {
            bail!("clipboard unavailable");
        }
        Ok(state.items.clone())
    }

    fn write_items(&self, items: &[RepresentationSet]) -> Result<()> {
        let mut state = self.lock();
        state.items = items.to_vec();
        state.change_count += 1;
        Ok(())
    }
}
