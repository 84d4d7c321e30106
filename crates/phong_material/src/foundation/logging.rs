//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Logs at `info` unless `RUST_LOG` says otherwise. Calling it more than
/// once is a no-op.
pub fn init() {
    let result = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
    if result.is_err() {
        trace!("Logger already initialized");
    }
}
