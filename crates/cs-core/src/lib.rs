//! # cs-core
//!
//! Domain models and port definitions for clipstash.
//!
//! This crate contains pure domain logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod clipboard;
pub mod history;
pub mod ids;
pub mod ports;
pub mod settings;

pub use clipboard::{IgnorePolicy, Representation, RepresentationSet};
pub use history::{ErasureTarget, HistoryChange, HistoryItem, HistoryObject, SourceApplication};
pub use ids::{ApplicationId, HistoryId, HistoryItemId};
pub use settings::Settings;
