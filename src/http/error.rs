//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Pipeline error
    Core(CoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Core(err) => match err {
                CoreError::DataUnavailable(msg) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new("DATA_UNAVAILABLE", msg),
                ),
                CoreError::InsufficientHistory(msg) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new("INSUFFICIENT_HISTORY", msg),
                ),
                CoreError::ForecastFailure(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("FORECAST_FAILURE", msg),
                ),
                CoreError::Configuration(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("CONFIGURATION_ERROR", msg),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Core(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization_skips_empty_details() {
        let error = ApiError::new("BAD_REQUEST", "nope");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));

        let error = error.with_details("flights_per_hour out of range");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("flights_per_hour out of range"));
    }

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let response =
            AppError::Core(CoreError::data_unavailable("too short")).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response =
            AppError::Core(CoreError::forecast_failure("backend down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::BadRequest("bad params".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
