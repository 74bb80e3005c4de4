use crate::config::TransformLimits;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::TransformError;
use crate::value::Value;
use serde_json::Value as JsonValue;

/// Multiplies numbers and repeats text by a non-negative factor
///
/// Oversized results are reported through the injected [`Diagnostics`] but
/// always returned in full.
#[derive(Debug, Clone)]
pub struct ValueTransformer<D = TracingDiagnostics> {
    limits: TransformLimits,
    diagnostics: D,
}

impl Default for ValueTransformer<TracingDiagnostics> {
    fn default() -> Self {
        Self::new(TransformLimits::default(), TracingDiagnostics::new())
    }
}

impl<D: Diagnostics> ValueTransformer<D> {
    pub fn new(limits: TransformLimits, diagnostics: D) -> Self {
        Self {
            limits,
            diagnostics,
        }
    }

    pub fn limits(&self) -> &TransformLimits {
        &self.limits
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Transform an arbitrary input
    ///
    /// The factor is validated before the input kind, so a negative factor
    /// yields `InvalidFactor` for every input.
    pub fn transform(&self, input: &JsonValue, factor: i64) -> Result<Value, TransformError> {
        ensure_factor(factor)?;
        let value = Value::try_from(input)?;
        self.apply(&value, factor)
    }

    /// Transform an already-typed value
    pub fn transform_value(&self, value: &Value, factor: i64) -> Result<Value, TransformError> {
        ensure_factor(factor)?;
        self.apply(value, factor)
    }

    fn apply(&self, value: &Value, factor: i64) -> Result<Value, TransformError> {
        match value {
            Value::Integer(n) => self.scale_integer(*n, factor),
            Value::Float(x) => Ok(Value::Float(x * factor as f64)),
            Value::Text(text) => self.repeat_text(text, factor),
        }
    }

    fn scale_integer(&self, n: i128, factor: i64) -> Result<Value, TransformError> {
        let product = n.checked_mul(i128::from(factor)).ok_or_else(|| {
            TransformError::overflow(format!("{n} * {factor} exceeds the integer range"))
        })?;

        let threshold = u128::from(self.limits.integer_warning_threshold.unsigned_abs());
        if product.unsigned_abs() > threshold {
            self.diagnostics.warn(&format!(
                "Result {product} is very large, consider reviewing input values"
            ));
        }

        Ok(Value::Integer(product))
    }

    fn repeat_text(&self, text: &str, factor: i64) -> Result<Value, TransformError> {
        if factor == 0 || text.is_empty() {
            return Ok(Value::Text(String::new()));
        }

        let count = usize::try_from(factor).map_err(|_| {
            TransformError::overflow(format!("repeat count {factor} exceeds the platform range"))
        })?;

        let length = text.chars().count().saturating_mul(count);
        if length > self.limits.text_warning_length {
            self.diagnostics.warn(&format!(
                "Text repetition would create a very large string ({length} chars)"
            ));
        }

        let bytes = text
            .len()
            .checked_mul(count)
            .filter(|bytes| *bytes <= isize::MAX as usize)
            .ok_or_else(|| {
                TransformError::overflow(format!(
                    "repeating {} bytes {count} times exceeds addressable memory",
                    text.len()
                ))
            })?;

        let mut repeated = String::new();
        repeated.try_reserve_exact(bytes).map_err(|e| {
            TransformError::overflow(format!("failed to allocate {bytes} bytes: {e}"))
        })?;
        for _ in 0..count {
            repeated.push_str(text);
        }

        Ok(Value::Text(repeated))
    }
}

fn ensure_factor(factor: i64) -> Result<(), TransformError> {
    if factor < 0 {
        return Err(TransformError::InvalidFactor { factor });
    }
    Ok(())
}
