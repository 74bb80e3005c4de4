use super::result::{ErrorDetail, InputDescription, SafeResult};
use super::transformer::ValueTransformer;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use serde_json::Value as JsonValue;

/// Wraps a [`ValueTransformer`] so that no failure reaches the caller
#[derive(Debug, Clone)]
pub struct SafeInvoker<D = TracingDiagnostics> {
    transformer: ValueTransformer<D>,
}

impl Default for SafeInvoker<TracingDiagnostics> {
    fn default() -> Self {
        Self::new(ValueTransformer::default())
    }
}

impl<D: Diagnostics> SafeInvoker<D> {
    pub fn new(transformer: ValueTransformer<D>) -> Self {
        Self { transformer }
    }

    pub fn transformer(&self) -> &ValueTransformer<D> {
        &self.transformer
    }

    /// Transform `input`, describing success or failure in the returned record
    ///
    /// `InvalidFactor` and `UnsupportedType` are reported as-is. Any other
    /// failure is logged with its detail and reported as a generic
    /// `UnexpectedError`.
    pub fn safe_transform(&self, input: &JsonValue, factor: i64) -> SafeResult {
        let description =
            InputDescription::describe(input, factor, self.transformer.limits().preview_length);

        match self.transformer.transform(input, factor) {
            Ok(value) => SafeResult::success(value, description),
            Err(error) if error.is_expected() => {
                SafeResult::failure(ErrorDetail::from(&error), description)
            }
            Err(error) => {
                self.transformer.diagnostics().error(&format!(
                    "Unexpected error in safe transform of {} input: {}",
                    description.input_kind_name, error
                ));
                SafeResult::failure(ErrorDetail::unexpected(), description)
            }
        }
    }
}
