//! In-memory diagnostics for testing
//!
//! Clones share the same message log, so a test can hand one clone to a
//! component and inspect the other.

use super::traits::Diagnostics;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

/// Diagnostics sink that records every message
///
/// # Examples
///
/// ```
/// use multiplier::diagnostics::{Diagnostics, RecordingDiagnostics};
///
/// let diagnostics = RecordingDiagnostics::new();
/// diagnostics.warn("large result");
///
/// assert_eq!(diagnostics.warnings(), vec!["large result".to_string()]);
/// assert!(diagnostics.errors().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in emission order
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|record| record.severity == severity)
            .map(|record| record.message.clone())
            .collect()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.lock().push(Record {
            severity,
            message: message.to_string(),
        });
    }

    // A test that panicked while holding the lock must not hide later records
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.push(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
