mod change_tracker;
mod common;
mod in_memory;
mod system;

pub use change_tracker::ChangeTracker;
pub use in_memory::InMemoryClipboard;
pub use system::SystemClipboard;
