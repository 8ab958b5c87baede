pub mod item_data;
