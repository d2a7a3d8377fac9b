use crate::validation::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
///
/// Transport/remote failures are deliberately absent: the relay normalizes
/// those into a `RelayOutcome::Failed` value instead of raising them.
#[derive(Debug, Clone)]
pub enum AppError {
    /// One or more lead fields failed validation.
    Validation(ValidationErrors),
    /// Deployment misconfiguration (missing or malformed webhook URL).
    Configuration(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "{}", errors),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Validation errors carry a per-field message map so the form can show
    /// each message inline. Configuration errors are logged loudly and kept
    /// opaque to the client.
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let fields: serde_json::Map<String, serde_json::Value> = errors
                    .fields()
                    .map(|(field, message)| (field.to_string(), json!(message)))
                    .collect();

                let body = Json(json!({
                    "error": "Validation failed",
                    "fields": fields,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                let body = Json(json!({
                    "error": "Service misconfigured",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
