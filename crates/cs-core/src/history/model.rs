use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clipboard::{sorted_types, Representation, RepresentationSet};
use crate::ids::{ApplicationId, HistoryId, HistoryItemId};

/// Type identifiers whose payload is treated as UTF-8 plain text for previews.
pub const PLAIN_TEXT_TYPES: &[&str] = &[
    "public.utf8-plain-text",
    "public.plain-text",
    "text/plain;charset=utf-8",
    "text/plain",
    "UTF8_STRING",
];

/// The frontmost application recorded at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceApplication {
    pub id: ApplicationId,
    /// Unique bundle location (e.g. file:///Applications/Safari.app/)
    pub bundle_url: String,
    pub should_ignore: bool,
}

/// One captured clipboard slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: HistoryItemId,
    /// Position in the original capture.
    pub item: u32,
    /// Sorted by the type ordering.
    pub types: Vec<String>,
    /// Keys are exactly `types`.
    pub data: BTreeMap<String, Vec<u8>>,
}

impl HistoryItem {
    /// Builds an item from a captured set, ordering its types for storage.
    pub fn capture(id: HistoryItemId, item: u32, set: RepresentationSet) -> Self {
        let types = sorted_types(set.types());
        let data = set
            .into_representations()
            .into_iter()
            .map(|rep| (rep.type_id, rep.bytes))
            .collect();

        Self {
            id,
            item,
            types,
            data,
        }
    }

    /// Head of the type ordering.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Representations in stored type order.
    pub fn representations(&self) -> impl Iterator<Item = Representation> + '_ {
        self.types.iter().map(|type_id| {
            let bytes = self.data.get(type_id).cloned().unwrap_or_default();
            Representation::new(type_id.clone(), bytes)
        })
    }

    pub fn text(&self) -> Option<&str> {
        PLAIN_TEXT_TYPES
            .iter()
            .filter_map(|t| self.data.get(*t))
            .find_map(|bytes| std::str::from_utf8(bytes).ok())
    }
}

/// One persisted clipboard-change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryObject {
    pub id: HistoryId,
    /// Unix epoch milliseconds.
    pub date_added_ms: i64,
    pub is_favorited: bool,
    pub application: Option<SourceApplication>,
    /// Ordered by `item`.
    pub items: Vec<HistoryItem>,
}

impl HistoryObject {
    pub fn preview_text(&self) -> Option<&str> {
        self.items.iter().find_map(HistoryItem::text)
    }

    pub fn total_size_bytes(&self) -> usize {
        self.items
            .iter()
            .flat_map(|item| item.data.values())
            .map(Vec::len)
            .sum()
    }
}

/// Input to the store's create operation.
#[derive(Debug, Clone)]
pub struct NewHistory {
    pub id: HistoryId,
    pub date_added_ms: i64,
    /// Bundle location of the frontmost application, if known.
    pub application: Option<String>,
    pub items: Vec<RepresentationSet>,
}

impl NewHistory {
    pub fn new(date_added_ms: i64, items: Vec<RepresentationSet>) -> Self {
        Self {
            id: HistoryId::new(),
            date_added_ms,
            application: None,
            items,
        }
    }

    pub fn with_id(mut self, id: HistoryId) -> Self {
        self.id = id;
        self
    }

    pub fn with_application(mut self, bundle_url: impl Into<String>) -> Self {
        self.application = Some(bundle_url.into());
        self
    }

    /// Ordered items ready to persist, ordinal = input index.
    pub fn history_items(&self) -> Vec<HistoryItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, set)| HistoryItem::capture(HistoryItemId::new(), idx as u32, set.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(HistoryId),
    /// The resolved source application is flagged as ignored.
    IgnoredApplication,
}
