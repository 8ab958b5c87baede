//! # cs-platform
//!
//! Platform-specific implementations for clipstash.
//!
//! This crate contains the adapters that touch the operating system (the
//! shared clipboard, application directories) and the polling runtime that
//! turns clipboard changes into capture requests.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod runtime;
