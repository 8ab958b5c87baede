mod change;
mod erasure;
mod model;
pub mod search;

pub use change::HistoryChange;
pub use erasure::ErasureTarget;
pub use model::{
    CreateOutcome, HistoryItem, HistoryObject, NewHistory, SourceApplication, PLAIN_TEXT_TYPES,
};
pub use search::{filter, SearchQuery};
