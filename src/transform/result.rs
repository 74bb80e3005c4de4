use crate::error::TransformError;
use crate::value::{preview, Kind, Value};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

pub const UNEXPECTED_ERROR_KIND: &str = "UnexpectedError";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Error descriptor carried by a failed [`SafeResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub message: String,
}

impl ErrorDetail {
    /// Generic descriptor that hides the underlying failure
    pub fn unexpected() -> Self {
        Self {
            kind: UNEXPECTED_ERROR_KIND.to_string(),
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<&TransformError> for ErrorDetail {
    fn from(error: &TransformError) -> Self {
        Self {
            kind: error.kind_name().to_string(),
            message: error.to_string(),
        }
    }
}

/// What was passed to the safe wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescription {
    pub input_kind_name: String,
    /// Rendered input, truncated to the configured preview length
    pub input_preview: String,
    pub factor: i64,
}

impl InputDescription {
    pub fn describe(input: &JsonValue, factor: i64, preview_length: usize) -> Self {
        Self {
            input_kind_name: Kind::of(input).name().to_string(),
            input_preview: preview(input, preview_length),
            factor,
        }
    }
}

/// Outcome of a safe transform
///
/// Serialized as `succeeded`, `value`, `error` and `inputDescription`, with
/// exactly one of `value` and `error` non-null.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeResult {
    outcome: Result<Value, ErrorDetail>,
    input_description: InputDescription,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SafeResultRecord<'a> {
    succeeded: bool,
    value: Option<&'a Value>,
    error: Option<&'a ErrorDetail>,
    input_description: &'a InputDescription,
}

impl Serialize for SafeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SafeResultRecord {
            succeeded: self.succeeded(),
            value: self.value(),
            error: self.error(),
            input_description: &self.input_description,
        }
        .serialize(serializer)
    }
}

impl SafeResult {
    pub fn success(value: Value, input_description: InputDescription) -> Self {
        Self {
            outcome: Ok(value),
            input_description,
        }
    }

    pub fn failure(error: ErrorDetail, input_description: InputDescription) -> Self {
        Self {
            outcome: Err(error),
            input_description,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn value(&self) -> Option<&Value> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.outcome.as_ref().err()
    }

    pub fn input_description(&self) -> &InputDescription {
        &self.input_description
    }

    pub fn into_value(self) -> Option<Value> {
        self.outcome.ok()
    }

    /// Single-line summary used by the CLI
    pub fn summary(&self) -> String {
        match &self.outcome {
            Ok(value) => value.to_string(),
            Err(error) => format!("Error: {}", error.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use crate::transform::safe_transform;
    use serde_json::json;

    #[test]
    fn test_success_invariant() {
        let description = InputDescription::describe(&json!(5), 2, 100);
        let result = SafeResult::success(Value::Integer(10), description);
        assert!(result.succeeded());
        assert_eq!(result.value(), Some(&Value::Integer(10)));
        assert!(result.error().is_none());
        assert_eq!(result.summary(), "10");
    }

    #[test]
    fn test_failure_invariant() {
        let description = InputDescription::describe(&json!(10), -1, 100);
        let error = TransformError::InvalidFactor { factor: -1 };
        let result = SafeResult::failure(ErrorDetail::from(&error), description);
        assert!(!result.succeeded());
        assert!(result.value().is_none());
        assert_eq!(result.error().unwrap().kind, "InvalidFactor");
        assert_eq!(
            result.summary(),
            "Error: Factor must be non-negative, got -1"
        );
    }

    #[test]
    fn test_describe_input() {
        let description = InputDescription::describe(&json!([1, 2, 3]), 2, 100);
        assert_eq!(description.input_kind_name, "list");
        assert_eq!(description.input_preview, "[1,2,3]");
        assert_eq!(description.factor, 2);
    }

    #[test]
    fn test_success_wire_shape() {
        let description = InputDescription::describe(&json!("ab"), 2, 100);
        let result = SafeResult::success(Value::from("abab"), description);
        assert_snapshot!(
            serde_json::to_string(&result).unwrap(),
            @r#"{"succeeded":true,"value":"abab","error":null,"inputDescription":{"inputKindName":"text","inputPreview":"ab","factor":2}}"#
        );
    }

    #[test]
    fn test_unexpected_wire_shape() {
        let description = InputDescription::describe(&json!(1), 3, 100);
        let result = SafeResult::failure(ErrorDetail::unexpected(), description);
        assert_snapshot!(
            serde_json::to_string(&result).unwrap(),
            @r#"{"succeeded":false,"value":null,"error":{"kind":"UnexpectedError","message":"An unexpected error occurred"},"inputDescription":{"inputKindName":"integer","inputPreview":"1","factor":3}}"#
        );
    }

    #[test]
    fn test_non_finite_float_wire_shape() {
        let result = safe_transform(&json!(1e308), 2);
        assert!(result.succeeded());
        assert_snapshot!(
            serde_json::to_string(&result).unwrap(),
            @r#"{"succeeded":true,"value":"inf","error":null,"inputDescription":{"inputKindName":"float","inputPreview":"1e308","factor":2}}"#
        );
    }
}
