use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::{load_limits, ConfigLoader};

pub const INTEGER_WARNING_THRESHOLD_VAR: &str = "MULTIPLIER_INTEGER_WARNING_THRESHOLD";
pub const TEXT_WARNING_LENGTH_VAR: &str = "MULTIPLIER_TEXT_WARNING_LENGTH";
pub const PREVIEW_LENGTH_VAR: &str = "MULTIPLIER_PREVIEW_LENGTH";

/// Advisory limits for transform results
///
/// Crossing a limit emits a warning; results are never clamped or truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformLimits {
    /// Integer results with an absolute value above this are reported
    pub integer_warning_threshold: i64,
    /// Text results longer than this many characters are reported
    pub text_warning_length: usize,
    /// Maximum characters of input echoed back in a `SafeResult`
    pub preview_length: usize,
}

impl Default for TransformLimits {
    fn default() -> Self {
        Self {
            integer_warning_threshold: 1_000_000_000_000_000,
            text_warning_length: 1_000_000,
            preview_length: 100,
        }
    }
}

impl TransformLimits {
    pub fn with_integer_warning_threshold(mut self, threshold: i64) -> Self {
        self.integer_warning_threshold = threshold;
        self
    }

    pub fn with_text_warning_length(mut self, length: usize) -> Self {
        self.text_warning_length = length;
        self
    }

    pub fn with_preview_length(mut self, length: usize) -> Self {
        self.preview_length = length;
        self
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup; unparseable values are ignored
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(threshold) = parse_var(&lookup, INTEGER_WARNING_THRESHOLD_VAR) {
            self.integer_warning_threshold = threshold;
        }

        if let Some(length) = parse_var(&lookup, TEXT_WARNING_LENGTH_VAR) {
            self.text_warning_length = length;
        }

        if let Some(length) = parse_var(&lookup, PREVIEW_LENGTH_VAR) {
            self.preview_length = length;
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}
