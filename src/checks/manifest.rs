//! Web app manifest inspection

use serde_json::{Map, Value};
use thiserror::Error;

/// Keys every installable manifest must declare
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "short_name",
    "theme_color",
    "background_color",
    "display",
    "start_url",
    "icons",
];

const NOT_SET: &str = "Not set";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object")]
    NotAnObject,
}

/// Parsed view of a manifest document
#[derive(Debug, Clone)]
pub struct ManifestReport {
    fields: Map<String, Value>,
}

impl ManifestReport {
    /// Parse manifest text. The root must be a JSON object.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ManifestError::NotAnObject),
        }
    }

    /// Display summary for `field`, or `None` when it is absent.
    pub fn field_summary(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(summarize_value)
    }

    /// Number of entries under `icons`; zero when absent or scalar.
    pub fn icon_count(&self) -> usize {
        match self.fields.get("icons") {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(items)) => items.len(),
            _ => 0,
        }
    }

    pub fn theme_color(&self) -> String {
        self.scalar_or_not_set("theme_color")
    }

    pub fn display_mode(&self) -> String {
        self.scalar_or_not_set("display")
    }

    fn scalar_or_not_set(&self, field: &str) -> String {
        match self.fields.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => NOT_SET.to_string(),
        }
    }
}

/// Strings print verbatim, collections print their length, and other
/// scalars print as JSON.
pub fn summarize_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(items) => format!("{} items", items.len()),
        other => other.to_string(),
    }
}
