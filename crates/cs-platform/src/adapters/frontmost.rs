use std::sync::{PoisonError, RwLock};

use cs_core::ports::FrontmostApplicationPort;

/// Frontmost application supplied from outside (the presentation layer or
/// a test), rather than queried from the window server.
#[derive(Debug, Default)]
pub struct ManualFrontmostApplication {
    current: RwLock<Option<String>>,
}

impl ManualFrontmostApplication {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn set(&self, bundle_url: Option<String>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = bundle_url;
    }
}

impl FrontmostApplicationPort for ManualFrontmostApplication {
    fn frontmost_application(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
