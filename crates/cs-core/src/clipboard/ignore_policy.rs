use serde::{Deserialize, Serialize};

use super::{RepresentationSet, TypeCategory};

/// Why a candidate capture was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Internal,
    AppMarker,
    Transient,
    Confidential,
    IgnoredApplication,
}

/// Toggles for the optional marker checks. Internal identifiers are always
/// ignored regardless of these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorePolicy {
    pub ignore_apps: bool,
    pub ignore_transient: bool,
    pub ignore_confidential: bool,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self {
            ignore_apps: true,
            ignore_transient: true,
            ignore_confidential: true,
        }
    }
}

impl IgnorePolicy {
    /// Policy with every optional check disabled.
    pub fn permissive() -> Self {
        Self {
            ignore_apps: false,
            ignore_transient: false,
            ignore_confidential: false,
        }
    }

    /// First matching reason for a single item, checked in fixed order.
    pub fn evaluate(&self, item: &RepresentationSet) -> Option<IgnoreReason> {
        let has = |category: TypeCategory| item.types().any(|t| category.contains(t));

        if has(TypeCategory::Internal) {
            return Some(IgnoreReason::Internal);
        }
        if self.ignore_apps && has(TypeCategory::AppMarker) {
            return Some(IgnoreReason::AppMarker);
        }
        if self.ignore_transient && has(TypeCategory::Transient) {
            return Some(IgnoreReason::Transient);
        }
        if self.ignore_confidential && has(TypeCategory::Confidential) {
            return Some(IgnoreReason::Confidential);
        }
        None
    }

    pub fn should_ignore(&self, item: &RepresentationSet) -> bool {
        self.evaluate(item).is_some()
    }

    /// A batch is discarded when any one of its items matches.
    pub fn evaluate_batch(&self, items: &[RepresentationSet]) -> Option<IgnoreReason> {
        items.iter().find_map(|item| self.evaluate(item))
    }
}
