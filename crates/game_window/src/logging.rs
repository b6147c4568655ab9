//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Respects `RUST_LOG`; defaults to `info` when unset so binaries report
/// window lifecycle events out of the box.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
