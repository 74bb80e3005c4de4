//! Logging configuration and initialization
//!
//! This module handles all logging setup for the binary. Logs go to stderr so
//! that command output on stdout stays machine-readable.

use crate::app::config::AppConfig;
use std::io::IsTerminal;
use tracing::{debug, trace};

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_line_number(config.verbose >= 2)
        .init();

    debug!("multiplier started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
