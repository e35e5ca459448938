// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    ValidationError(String),
    Configuration(String),
    UpstreamRequestFailed(String),
    UpstreamEmptyResponse(String),
    UpstreamParseError {
        message: String,
        details: Option<String>,
    },
    UpstreamShapeError {
        message: String,
        details: Option<String>,
    },
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            ApiError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            ApiError::UpstreamRequestFailed(msg) => write!(f, "Upstream Request Failed: {}", msg),
            ApiError::UpstreamEmptyResponse(msg) => write!(f, "Upstream Empty Response: {}", msg),
            ApiError::UpstreamParseError { message, .. } => {
                write!(f, "Upstream Parse Error: {}", message)
            }
            ApiError::UpstreamShapeError { message, .. } => {
                write!(f, "Upstream Shape Error: {}", message)
            }
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", None),
            ApiError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR", None)
            }
            ApiError::Configuration(msg) => {
                error!(error = %msg, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    "CONFIGURATION_ERROR",
                    None,
                )
            }
            ApiError::UpstreamRequestFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "UPSTREAM_REQUEST_FAILED",
                None,
            ),
            ApiError::UpstreamEmptyResponse(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "UPSTREAM_EMPTY_RESPONSE",
                None,
            ),
            ApiError::UpstreamParseError { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
                "UPSTREAM_PARSE_ERROR",
                details,
            ),
            ApiError::UpstreamShapeError { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
                "UPSTREAM_SHAPE_ERROR",
                details,
            ),
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
                None,
            ),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            details,
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid() {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::ValidationError(error_messages.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let response = ApiError::BadRequest("position is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::ValidationError("days: out of range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let response =
            ApiError::Configuration("OpenAI API key is not configured".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::UpstreamEmptyResponse("no content".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::UpstreamParseError {
            message: "response is not valid JSON".to_string(),
            details: Some("expected value at line 1".to_string()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_result_conversion() {
        let mut result = ValidationResult::new();
        result.add_error("days", "must be between 1 and 90");

        let err = ApiError::from(result);
        match err {
            ApiError::ValidationError(msg) => assert!(msg.contains("days")),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
