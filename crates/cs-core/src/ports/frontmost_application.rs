/// Supplies the bundle location of the application that owned focus when a
/// clipboard change was observed.
pub trait FrontmostApplicationPort: Send + Sync {
    fn frontmost_application(&self) -> Option<String>;
}
