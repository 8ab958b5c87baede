mod apply_retention;
mod delete_history;
mod erase_history;
mod list_history;
mod search_history;
mod toggle_favorite;

pub use apply_retention::ApplyRetention;
pub use delete_history::DeleteHistory;
pub use erase_history::EraseHistory;
pub use list_history::ListHistory;
pub use search_history::SearchHistory;
pub use toggle_favorite::ToggleFavorite;
