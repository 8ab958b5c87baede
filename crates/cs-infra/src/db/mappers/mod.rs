pub mod history_item_mapper;
pub mod history_object_mapper;
pub mod source_application_mapper;

pub use history_item_mapper::HistoryItemRowMapper;
pub use history_object_mapper::HistoryObjectRowMapper;
pub use source_application_mapper::SourceApplicationRowMapper;
