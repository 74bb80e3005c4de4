//! Demonstration and timing comparison commands
//!
//! Presentation code only: nothing here is part of the transform contract.

pub mod baseline;
pub mod measure;
pub mod report;

pub use baseline::NaiveDoubler;
pub use measure::{measure, Measurement};
pub use report::{run_comparison, run_demo};
