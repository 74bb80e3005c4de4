//! Value model
//!
//! Transformable values are a closed tagged union over integers, floats and
//! text. Arbitrary inputs arrive as `serde_json::Value` and are classified by
//! [`Kind`] before dispatch; anything outside the three supported kinds is
//! rejected with [`TransformError::UnsupportedType`].

use crate::error::TransformError;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};
use std::fmt;

/// A value that can be transformed by a factor
///
/// Integers are held as `i128`, so any JSON `i64` or `u64` times an `i64`
/// factor is exact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i128),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Text(_) => Kind::Text,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

// JSON has no encoding for non-finite floats; serde_json would write `null`
fn serialize_float<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if x.is_nan() {
        serializer.serialize_str("NaN")
    } else if x.is_infinite() {
        serializer.serialize_str(if *x > 0.0 { "inf" } else { "-inf" })
    } else {
        serializer.serialize_f64(*x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" on whole floats
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = TransformError;

    fn try_from(input: &JsonValue) -> Result<Self, Self::Error> {
        match input {
            JsonValue::Number(number) if is_integer(number) => {
                integer_of(number).map(Self::Integer)
            }
            JsonValue::Number(number) => number
                .as_f64()
                .map(Self::Float)
                .ok_or(TransformError::UnsupportedType {
                    kind: Kind::Float.name(),
                }),
            JsonValue::String(text) => Ok(Self::Text(text.clone())),
            other => Err(TransformError::UnsupportedType {
                kind: Kind::of(other).name(),
            }),
        }
    }
}

/// Whether a JSON number was written as an integer literal
///
/// Numbers keep their source text (`arbitrary_precision`), so literals wider
/// than `u64` are still recognised.
fn is_integer(number: &Number) -> bool {
    number.is_i64() || number.is_u64() || !number.to_string().contains(['.', 'e', 'E'])
}

fn integer_of(number: &Number) -> Result<i128, TransformError> {
    if let Some(n) = number.as_i64() {
        return Ok(i128::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Ok(i128::from(n));
    }
    let literal = number.to_string();
    literal.parse().map_err(|_| {
        TransformError::overflow(format!("integer {literal} exceeds the supported range"))
    })
}

/// Runtime kind of an arbitrary input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    Text,
    Null,
    Bool,
    List,
    Map,
}

impl Kind {
    pub fn of(input: &JsonValue) -> Self {
        match input {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Bool,
            JsonValue::Number(n) if is_integer(n) => Self::Integer,
            JsonValue::Number(_) => Self::Float,
            JsonValue::String(_) => Self::Text,
            JsonValue::Array(_) => Self::List,
            JsonValue::Object(_) => Self::Map,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::List => "list",
            Self::Map => "map",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Text)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render an input for diagnostics, truncated to `limit` characters
///
/// Text is rendered raw; every other kind is rendered as compact JSON.
pub fn preview(input: &JsonValue, limit: usize) -> String {
    match input {
        JsonValue::String(text) => truncate_chars(text, limit),
        other => truncate_chars(&other.to_string(), limit),
    }
}

/// Keep at most `limit` characters of `text`
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Kind::of(&json!(5)), Kind::Integer);
        assert_eq!(Kind::of(&json!(u64::MAX)), Kind::Integer);
        assert_eq!(Kind::of(&json!(3.5)), Kind::Float);
        assert_eq!(Kind::of(&json!("hi")), Kind::Text);
        assert_eq!(Kind::of(&json!(null)), Kind::Null);
        assert_eq!(Kind::of(&json!(true)), Kind::Bool);
        assert_eq!(Kind::of(&json!([1, 2, 3])), Kind::List);
        assert_eq!(Kind::of(&json!({})), Kind::Map);
    }

    #[test]
    fn test_supported_kinds() {
        assert!(Kind::Integer.is_supported());
        assert!(Kind::Float.is_supported());
        assert!(Kind::Text.is_supported());
        assert!(!Kind::Bool.is_supported());
        assert!(!Kind::List.is_supported());
        assert!(Kind::Float.is_numeric());
        assert!(!Kind::Text.is_numeric());
    }

    #[test]
    fn test_try_from_json() {
        assert_eq!(Value::try_from(&json!(5)), Ok(Value::Integer(5)));
        assert_eq!(Value::try_from(&json!(2.5)), Ok(Value::Float(2.5)));
        assert_eq!(
            Value::try_from(&json!("test")),
            Ok(Value::Text("test".to_string()))
        );
        assert_eq!(
            Value::try_from(&json!([1, 2, 3])),
            Err(TransformError::UnsupportedType { kind: "list" })
        );
        assert_eq!(
            Value::try_from(&json!(null)),
            Err(TransformError::UnsupportedType { kind: "null" })
        );
    }

    #[test]
    fn test_wide_integers_stay_integers() {
        assert_eq!(
            Value::try_from(&json!(u64::MAX)),
            Ok(Value::Integer(i128::from(u64::MAX)))
        );

        let input: JsonValue = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(Kind::of(&input), Kind::Integer);
        assert_eq!(
            Value::try_from(&input),
            Ok(Value::Integer(100_000_000_000_000_000_000))
        );

        let input: JsonValue = serde_json::from_str("1e20").unwrap();
        assert_eq!(Kind::of(&input), Kind::Float);
        assert_eq!(Value::try_from(&input), Ok(Value::Float(1e20)));
    }

    #[test]
    fn test_integer_beyond_i128_is_overflow() {
        let input: JsonValue =
            serde_json::from_str("1000000000000000000000000000000000000000").unwrap();
        let err = Value::try_from(&input).unwrap_err();
        assert_eq!(err.kind_name(), "Overflow");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(10).to_string(), "10");
        assert_eq!(Value::Float(14.0).to_string(), "14.0");
        assert_eq!(Value::Float(7.5).to_string(), "7.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_untagged_serialization() {
        let values = vec![Value::Integer(3), Value::Float(7.5), Value::from("ab")];
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[3,7.5,"ab"]"#);
    }

    #[test]
    fn test_non_finite_floats_serialize_as_strings() {
        let values = vec![
            Value::Float(f64::INFINITY),
            Value::Float(f64::NEG_INFINITY),
            Value::Float(f64::NAN),
            Value::Integer(i128::from(u64::MAX) * 2),
        ];
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"["inf","-inf","NaN",36893488147419103230]"#
        );
    }

    #[test]
    fn test_preview_truncates_by_character() {
        let long = "é".repeat(150);
        let shown = preview(&json!(long), 100);
        assert_eq!(shown.chars().count(), 100);

        assert_eq!(preview(&json!("short"), 100), "short");
        assert_eq!(preview(&json!([1, 2, 3]), 100), "[1,2,3]");
        assert_eq!(preview(&json!(null), 100), "null");
        assert_eq!(preview(&json!("abcdef"), 3), "abc");
    }
}
