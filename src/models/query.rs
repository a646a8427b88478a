// src/models/query.rs
// DOCUMENTATION: Inbound request payload for natural-language queries
// PURPOSE: Deserialize and validate the body of POST /ask-for-location

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Natural language question about places
/// DOCUMENTATION: Created once per inbound request and never mutated
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationQuery {
    /// Free text query, e.g. "What are the top museums in Cracow?"
    #[validate(length(min = 1, max = 1000), custom = "validate_not_blank")]
    pub query: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_query"));
    }
    Ok(())
}
