// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the location query service

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a JSON body
/// carrying a human readable `detail` field
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("API keys not configured")]
    ApiKeysNotConfigured,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Language model error: {0}")]
    LanguageModelError(String),

    #[error("Error processing request: {0}")]
    ProcessingError(String),
}

impl LocationError {
    /// Stable machine-readable code for the error body
    pub fn error_code(&self) -> &'static str {
        match self {
            LocationError::ApiKeysNotConfigured => "API_KEYS_NOT_CONFIGURED",
            LocationError::InvalidInput(_) => "INVALID_INPUT",
            LocationError::ValidationError(_) => "VALIDATION_ERROR",
            LocationError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            LocationError::LanguageModelError(_) => "LANGUAGE_MODEL_ERROR",
            LocationError::ProcessingError(_) => "PROCESSING_ERROR",
        }
    }
}

/// Convert LocationError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for LocationError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "detail": self.to_string(),
            "code": self.error_code(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LocationError::ApiKeysNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            LocationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LocationError::ValidationError(_) => StatusCode::BAD_REQUEST,
            LocationError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            LocationError::LanguageModelError(_) => StatusCode::BAD_GATEWAY,
            LocationError::ProcessingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            LocationError::ApiKeysNotConfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LocationError::ProcessingError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LocationError::InvalidInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LocationError::ExternalApiError("down".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_processing_error_message() {
        let err = LocationError::ProcessingError("timeout".to_string());
        assert_eq!(err.to_string(), "Error processing request: timeout");
    }

    #[actix_rt::test]
    async fn test_error_body_contains_detail() {
        let response = LocationError::ApiKeysNotConfigured.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "API keys not configured");
        assert_eq!(body["code"], "API_KEYS_NOT_CONFIGURED");
        assert!(body["timestamp"].is_string());
    }
}
