//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, TransformError};
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `TransformError`: shows the message, plus the error code description in verbose mode
/// - For other errors: shows the message, plus the error chain in verbose mode
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    std::process::exit(report_fatal_error(&error, verbose))
}

/// Print the error to stderr and return the exit code to use
pub fn report_fatal_error(error: &anyhow::Error, verbose: u8) -> i32 {
    if let Some(transform_err) = error.downcast_ref::<TransformError>() {
        eprintln!("Error: {transform_err}");

        if verbose >= 1 {
            eprintln!(
                "\n[E{:04}] {}",
                transform_err.code(),
                describe_error_code(transform_err.code())
            );
        }

        transform_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    }
}
