use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryStoreError {
    /// The transaction was rolled back.
    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("query error: {0}")]
    Query(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("no async runtime available to drive the monitor")]
    RuntimeUnavailable,

    #[error("clipboard access failed: {0}")]
    Clipboard(String),
}
