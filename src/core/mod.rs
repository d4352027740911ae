//! Core - crate-wide error type and logging bootstrap

mod error;
mod logging;

pub use error::GlassError;
pub use logging::init_logging;
