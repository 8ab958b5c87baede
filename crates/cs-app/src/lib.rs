//! clipstash application layer
//!
//! Use cases over the core ports, the dependency grouping they are built
//! from, and the `App` facade handed to the binary.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
