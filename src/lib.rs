//! # Multiplier
//!
//! Multiply numbers or repeat text by a non-negative factor.
//!
//! ## Usage
//!
//! ```bash
//! multiplier transform '"Hello"' --factor 3
//! multiplier batch '[1, 2.5, "test"]' --factor 3
//! ```
//!
//! ## Modules
//!
//! - `transform` - The transformer, its never-failing safe wrapper and the batch runner
//! - `value` - Tagged value model and input kind classification
//! - `diagnostics` - Injected sink for advisory warnings and unexpected failures
//! - `error` - Transform error type and error code registry
//! - `config` - Advisory limits loaded from TOML and the environment
//! - `app` - Binary configuration, logging and fatal error handling
//! - `demo` - Demonstration and timing comparison commands
pub mod app;
pub mod config;
pub mod demo;
pub mod diagnostics;
pub mod error;
pub mod transform;
pub mod value;

pub use error::TransformError;
pub use transform::{batch_transform, safe_transform, transform, SafeResult};
pub use value::{Kind, Value};
