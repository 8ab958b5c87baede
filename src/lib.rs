//! clipstash headless runtime
//!
//! Bootstraps tracing, wires the infra and platform adapters into the
//! application layer and runs the clipboard monitor until interrupted.

pub mod bootstrap;
