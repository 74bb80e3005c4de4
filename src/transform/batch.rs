use super::result::SafeResult;
use super::safe::SafeInvoker;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::TransformError;
use crate::value::Kind;
use serde_json::Value as JsonValue;
use tracing::trace;

/// Input indices grouped by kind, each group in ascending index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindGroups {
    pub numeric: Vec<usize>,
    pub text: Vec<usize>,
    pub other: Vec<usize>,
}

impl KindGroups {
    pub fn partition(values: &[JsonValue]) -> Self {
        let mut groups = Self::default();
        for (index, value) in values.iter().enumerate() {
            let kind = Kind::of(value);
            if kind.is_numeric() {
                groups.numeric.push(index);
            } else if kind == Kind::Text {
                groups.text.push(index);
            } else {
                groups.other.push(index);
            }
        }
        groups
    }

    /// Indices in processing order: numeric, then text, then everything else
    pub fn processing_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.numeric
            .iter()
            .chain(&self.text)
            .chain(&self.other)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.numeric.len() + self.text.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Applies a [`SafeInvoker`] to every element of a list
///
/// Results are returned at the index of their input regardless of the order
/// in which groups are processed.
#[derive(Debug, Clone)]
pub struct BatchRunner<D = TracingDiagnostics> {
    invoker: SafeInvoker<D>,
}

impl Default for BatchRunner<TracingDiagnostics> {
    fn default() -> Self {
        Self::new(SafeInvoker::default())
    }
}

impl<D: Diagnostics> BatchRunner<D> {
    pub fn new(invoker: SafeInvoker<D>) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &SafeInvoker<D> {
        &self.invoker
    }

    /// Transform every element of a JSON array
    ///
    /// Only a non-array `values` fails; per-element failures are captured in
    /// each element's [`SafeResult`].
    pub fn batch_transform(
        &self,
        values: &JsonValue,
        factor: i64,
    ) -> Result<Vec<SafeResult>, TransformError> {
        match values {
            JsonValue::Array(items) => Ok(self.batch_transform_slice(items, factor)),
            other => Err(TransformError::InvalidArgument {
                kind: Kind::of(other).name(),
            }),
        }
    }

    pub fn batch_transform_slice(&self, values: &[JsonValue], factor: i64) -> Vec<SafeResult> {
        let groups = KindGroups::partition(values);
        trace!(
            "Batch of {} values: {} numeric, {} text, {} other",
            values.len(),
            groups.numeric.len(),
            groups.text.len(),
            groups.other.len()
        );

        let mut slots: Vec<Option<SafeResult>> = vec![None; values.len()];
        for index in groups.processing_order() {
            slots[index] = Some(self.invoker.safe_transform(&values[index], factor));
        }

        // Every index belongs to exactly one group
        slots.into_iter().flatten().collect()
    }
}
