//! Logging utilities for openrouter-ping
//!
//! Re-exports tracing macros with log_* naming convention for consistency,
//! and installs the stderr subscriber used by the binary.

use tracing_subscriber::EnvFilter;

// Re-export tracing macros with log_* naming
pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};

/// Install a fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
