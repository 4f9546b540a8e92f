use serde::Deserialize;
use serde_json::{Map, Value};

/// Failure body returned by the backend: a single `message`, a per-field
/// `errors` map, or both.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

impl ErrorBody {
    /// Lenient extraction from an arbitrary JSON value; anything that is not
    /// an object yields an empty body.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string);
        let errors = object.get("errors").and_then(Value::as_object).cloned();
        Self { message, errors }
    }

    /// All `errors` messages in server order. A field mapped to a single
    /// string counts as a one-element list.
    #[must_use]
    pub fn flattened_errors(&self) -> Vec<String> {
        let Some(errors) = &self.errors else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for value in errors.values() {
            match value {
                Value::Array(items) => out.extend(items.iter().map(value_text)),
                Value::Null => {}
                other => out.push(value_text(other)),
            }
        }
        out
    }

    /// Banner text: `message`, else the joined `errors`, else `fallback`.
    #[must_use]
    pub fn banner_message(&self, fallback: &str) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let flattened = self.flattened_errors();
        if !flattened.is_empty() {
            return flattened.join(", ");
        }
        fallback.to_string()
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
