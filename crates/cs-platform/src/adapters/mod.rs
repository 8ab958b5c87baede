mod frontmost;
mod paste;

pub use frontmost::ManualFrontmostApplication;
pub use paste::NoopPasteTrigger;
