//! Read-side substring filter over captured history.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::{HistoryItem, HistoryObject};

/// Lowercases and strips diacritics so `"Café"` and `"cafe"` compare equal.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// `None` when the trimmed query is empty.
    pub fn parse(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: fold(trimmed),
        })
    }

    fn hit(&self, haystack: &str) -> bool {
        fold(haystack).contains(&self.needle)
    }

    pub fn matches_item(&self, item: &HistoryItem) -> bool {
        item.types.iter().any(|t| self.hit(t))
            || item.data.iter().any(|(key, value)| {
                self.hit(key)
                    || std::str::from_utf8(value)
                        .map(|text| self.hit(text))
                        .unwrap_or(false)
            })
    }

    pub fn matches(&self, object: &HistoryObject) -> bool {
        object.items.iter().any(|item| self.matches_item(item))
    }
}

/// `None` means "no filter"; otherwise the matching objects in input order.
pub fn filter(query: &str, objects: &[HistoryObject]) -> Option<Vec<HistoryObject>> {
    let query = SearchQuery::parse(query)?;
    Some(
        objects
            .iter()
            .filter(|object| query.matches(object))
            .cloned()
            .collect(),
    )
}
