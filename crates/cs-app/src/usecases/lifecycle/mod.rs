mod periodic_retention;
mod shutdown;

pub use periodic_retention::spawn_periodic_retention;
pub use shutdown::{ShutdownAction, ShutdownRetention};
