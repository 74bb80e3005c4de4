//! Value transformation
//!
//! Three layers, each wrapping the previous one:
//! - [`ValueTransformer`] multiplies numbers and repeats text, surfacing failures
//! - [`SafeInvoker`] converts every outcome into a [`SafeResult`]
//! - [`BatchRunner`] applies the safe wrapper across a list, preserving order
//!
//! The free functions at this level wire the default limits and
//! [`TracingDiagnostics`].

mod batch;
mod result;
mod safe;
mod transformer;

pub use batch::{BatchRunner, KindGroups};
pub use result::{
    ErrorDetail, InputDescription, SafeResult, UNEXPECTED_ERROR_KIND, UNEXPECTED_ERROR_MESSAGE,
};
pub use safe::SafeInvoker;
pub use transformer::ValueTransformer;

use crate::diagnostics::TracingDiagnostics;
use crate::error::TransformError;
use crate::value::Value;
use serde_json::Value as JsonValue;

/// Multiply a number or repeat text by `factor`
///
/// # Examples
///
/// ```
/// use multiplier::transform::transform;
/// use multiplier::Value;
/// use serde_json::json;
///
/// assert_eq!(transform(&json!(5), 2).unwrap(), Value::Integer(10));
/// assert_eq!(transform(&json!("Hello"), 3).unwrap(), Value::from("HelloHelloHello"));
/// assert!(transform(&json!(10), -1).is_err());
/// ```
pub fn transform(input: &JsonValue, factor: i64) -> Result<Value, TransformError> {
    ValueTransformer::<TracingDiagnostics>::default().transform(input, factor)
}

/// Transform without ever failing; the outcome is described by the returned record
pub fn safe_transform(input: &JsonValue, factor: i64) -> SafeResult {
    SafeInvoker::<TracingDiagnostics>::default().safe_transform(input, factor)
}

/// Safely transform every element of a JSON array
///
/// Fails with [`TransformError::InvalidArgument`] when `values` is not an array.
pub fn batch_transform(values: &JsonValue, factor: i64) -> Result<Vec<SafeResult>, TransformError> {
    BatchRunner::<TracingDiagnostics>::default().batch_transform(values, factor)
}
