use crate::config::Config;
use crate::errors::AppError;
use crate::models::{LeadSubmission, RelayOutcome, SubmitResponse};
use crate::relay::WebhookRelay;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client forwarding leads to the automation webhook.
    pub relay: WebhookRelay,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "lead-relay-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/leads
///
/// Accepts a lead submission from the form, validates it, and relays it to
/// the configured webhook.
///
/// # Responses
///
/// * `422` with a per-field message map when validation fails.
/// * `200` with `{"success":true,"data":...}` when the webhook accepted it.
/// * `502` with `{"success":false,"error":...}` when the webhook or the
///   network call failed; the caller may retry.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(candidate): Json<LeadSubmission>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    tracing::info!("POST /api/v1/leads - company: {}", candidate.company);

    let outcome = state
        .relay
        .submit(&candidate)
        .await
        .map_err(AppError::Validation)?;

    let status = match &outcome {
        RelayOutcome::Delivered(_) => StatusCode::OK,
        RelayOutcome::Failed(message) => {
            tracing::warn!("Lead relay failed: {}", message);
            StatusCode::BAD_GATEWAY
        }
    };

    Ok((status, Json(outcome.into())))
}
