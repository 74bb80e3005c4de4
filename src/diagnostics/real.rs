//! Diagnostics backed by the process-wide `tracing` subscriber

use super::traits::Diagnostics;
use tracing::{error, warn};

/// Forwards diagnostics to `tracing` under the `multiplier::transform` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        warn!(target: "multiplier::transform", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "multiplier::transform", "{}", message);
    }
}
