//! Diagnostics abstraction for advisory warnings and unexpected failures
//!
//! Transform components never reach for a global logger directly. They are
//! handed a [`Diagnostics`] implementation instead:
//! - [`TracingDiagnostics`] forwards to `tracing`, wired once by the binary
//! - [`RecordingDiagnostics`] keeps messages in memory for tests
//!
//! # Testing
//!
//! ```
//! use multiplier::diagnostics::RecordingDiagnostics;
//! use multiplier::transform::ValueTransformer;
//! use multiplier::config::TransformLimits;
//! use serde_json::json;
//!
//! let diagnostics = RecordingDiagnostics::new();
//! let transformer = ValueTransformer::new(TransformLimits::default(), diagnostics.clone());
//!
//! transformer.transform(&json!(10_i64.pow(15)), 2).unwrap();
//! assert_eq!(diagnostics.warnings().len(), 1);
//! ```

mod mock;
mod real;
mod traits;

pub use mock::{Record, RecordingDiagnostics, Severity};
pub use real::TracingDiagnostics;
pub use traits::Diagnostics;
