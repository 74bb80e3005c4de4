//! Application configuration
//!
//! This module handles application-wide configuration settings.

use crate::config::{load_limits, TransformLimits};
use crate::diagnostics::TracingDiagnostics;
use crate::transform::{BatchRunner, SafeInvoker, ValueTransformer};
use anyhow::Result;
use std::path::Path;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Advisory limits handed to every transform component
    pub limits: TransformLimits,
}

impl AppConfig {
    /// Create a configuration, reading limits from `config_path` and the environment
    pub fn new(verbose: u8, config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            verbose,
            limits: load_limits(config_path)?,
        })
    }

    pub fn with_limits(mut self, limits: TransformLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn transformer(&self) -> ValueTransformer<TracingDiagnostics> {
        ValueTransformer::new(self.limits.clone(), TracingDiagnostics::new())
    }

    pub fn safe_invoker(&self) -> SafeInvoker<TracingDiagnostics> {
        SafeInvoker::new(self.transformer())
    }

    pub fn batch_runner(&self) -> BatchRunner<TracingDiagnostics> {
        BatchRunner::new(self.safe_invoker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), "info");
        config.verbose = 1;
        assert_eq!(config.log_level(), "debug");
        config.verbose = 5;
        assert_eq!(config.log_level(), "trace");
    }

    #[test]
    fn test_components_share_limits() {
        let limits = TransformLimits::default().with_preview_length(3);
        let config = AppConfig::default().with_limits(limits.clone());
        assert_eq!(config.transformer().limits(), &limits);
        assert_eq!(
            config.batch_runner().invoker().transformer().limits(),
            &limits
        );
    }
}
