// src/models/intent.rs
// DOCUMENTATION: Structured search intent derived from a free text query
// PURPOSE: Parse language model output with a fixed fallback

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Place type used when the model cannot tell what the user is after
pub const DEFAULT_PLACE_TYPE: &str = "places of interest";

/// Search parameters extracted from a natural language query
/// DOCUMENTATION: `filters` are advisory hints (price, rating, open status,
/// distance, popularity, language/region) and are not enforced anywhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIntent {
    /// Location name (city, neighborhood, ...) or empty string
    pub location: String,
    /// Kind of place the user is looking for
    pub place_type: String,
    /// Free form preference tags
    pub filters: Vec<String>,
    /// Text sent to the nearby search; always the original query
    pub search_query: String,
}

impl ExtractedIntent {
    /// Intent used whenever the model output cannot be interpreted
    pub fn fallback(query: &str) -> Self {
        Self {
            location: String::new(),
            place_type: DEFAULT_PLACE_TYPE.to_string(),
            filters: Vec::new(),
            search_query: query.to_string(),
        }
    }

    /// Interpret raw model output for `query`
    /// DOCUMENTATION: Never fails. Invalid JSON or a non-object value yields
    /// `fallback`; missing or mistyped fields default one by one.
    pub fn from_model_output(raw: &str, query: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Self::from_fields(&fields, query),
            Ok(other) => {
                log::warn!(
                    "Extraction output is not a JSON object ({}). Using fallback extraction.",
                    json_kind(&other)
                );
                Self::fallback(query)
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse extraction JSON: {}. Using fallback extraction.",
                    e
                );
                Self::fallback(query)
            }
        }
    }

    fn from_fields(fields: &Map<String, Value>, query: &str) -> Self {
        let location = fields
            .get("location")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let place_type = fields
            .get("place_type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PLACE_TYPE)
            .to_string();

        let filters = fields
            .get("filters")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            location,
            place_type,
            filters,
            search_query: query.to_string(),
        }
    }

    /// Location to geocode, if any
    pub fn location(&self) -> Option<&str> {
        let trimmed = self.location.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
