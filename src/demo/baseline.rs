//! Unvalidated baseline used for comparison
//!
//! Doubles whatever it is given, printing a message and returning `None` when
//! the input cannot be doubled. It performs no factor validation, emits no
//! diagnostics and gives callers no structured error.

use serde_json::{Number, Value as JsonValue};

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDoubler;

impl NaiveDoubler {
    pub fn double(&self, input: &JsonValue) -> Option<JsonValue> {
        match input {
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => match i.checked_mul(2) {
                    Some(doubled) => Some(JsonValue::from(doubled)),
                    None => {
                        println!("An unexpected error occurred: integer overflow");
                        None
                    }
                },
                None => n
                    .as_f64()
                    .and_then(|x| Number::from_f64(x * 2.0))
                    .map(JsonValue::Number),
            },
            JsonValue::String(text) => Some(JsonValue::String(text.repeat(2))),
            JsonValue::Array(items) => {
                let mut doubled = items.clone();
                doubled.extend(items.iter().cloned());
                Some(JsonValue::Array(doubled))
            }
            _ => {
                println!(
                    "Error: Input must be a type that supports multiplication (e.g., numbers or strings)"
                );
                None
            }
        }
    }
}
