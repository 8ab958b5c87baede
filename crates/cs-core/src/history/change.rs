use crate::ids::HistoryId;

/// Published by the history store after each committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryChange {
    Created(HistoryId),
    Deleted(HistoryId),
    Erased,
    Pruned { removed: u64 },
    FavoriteToggled(HistoryId),
}
