//! Stderr logging bootstrap for the command-line tools.
//!
//! Diagnostics go to stderr so they never mix with the declaration stream
//! on stdout. The level comes from `RUST_LOG`, defaulting to `warn`.

use flexi_logger::{Logger, LoggerHandle};

/// Starts stderr logging, returning the handle that keeps it alive.
///
/// Hold the handle for the duration of `main`. Returns `None` when a logger
/// is already installed or the spec is invalid; both are harmless, the tools
/// just run without diagnostics.
pub fn init_logging() -> Option<LoggerHandle> {
    Logger::try_with_env_or_str("warn")
        .ok()?
        .log_to_stderr()
        .start()
        .ok()
}
