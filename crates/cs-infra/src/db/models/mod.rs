pub mod history_item;
pub mod history_object;
pub mod source_application;

pub use history_item::{HistoryItemRow, NewHistoryItemRow};
pub use history_object::{HistoryObjectRow, NewHistoryObjectRow};
pub use source_application::{NewSourceApplicationRow, SourceApplicationRow};
