use crate::config::Config;
use crate::errors::AppError;
use crate::models::{LeadRecord, LeadSubmission, RelayOutcome, WebhookPayload};
use crate::validation::{validate, ValidationErrors};
use serde_json::json;
use url::Url;

/// Client that forwards validated leads to the automation webhook.
///
/// This is the single point where a lead crosses the system boundary.
/// Fire-once: one outbound POST per submission, no retries, no explicit
/// timeout (the reqwest default applies).
#[derive(Debug, Clone)]
pub struct WebhookRelay {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookRelay {
    /// Creates a new `WebhookRelay` for the given destination URL.
    ///
    /// A missing or malformed URL is a deployment fault and surfaces as a
    /// `Configuration` error, never as a `RelayOutcome`.
    pub fn new(webhook_url: &str) -> Result<Self, AppError> {
        if webhook_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "WEBHOOK_URL is not configured".to_string(),
            ));
        }

        let url = Url::parse(webhook_url).map_err(|e| {
            AppError::Configuration(format!("WEBHOOK_URL is not a valid URL: {}", e))
        })?;

        let client = reqwest::Client::builder().build().map_err(|e| {
            AppError::Configuration(format!("Failed to create webhook client: {}", e))
        })?;

        Ok(Self {
            client,
            webhook_url: url.into(),
        })
    }

    /// Creates a relay from the loaded application configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.webhook_url)
    }

    /// Validates a candidate lead and, if valid, forwards it.
    ///
    /// Validation failure propagates as a typed error with per-field
    /// messages; it is never folded into the `{success:false}` shape. The
    /// relay re-runs the same rules the form uses, so a well-behaved client
    /// never sees this error path.
    pub async fn submit(
        &self,
        candidate: &LeadSubmission,
    ) -> Result<RelayOutcome, ValidationErrors> {
        let record = validate(candidate)?;
        Ok(self.deliver(&record).await)
    }

    /// Forwards a validated lead, normalizing every transport failure into
    /// a `RelayOutcome::Failed` value.
    pub async fn deliver(&self, record: &LeadRecord) -> RelayOutcome {
        let payload = WebhookPayload::from_record(record);

        match self.post_payload(&payload).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Error submitting lead: {}", e);
                let message = e.to_string();
                RelayOutcome::Failed(if message.is_empty() {
                    "Unknown error occurred".to_string()
                } else {
                    message
                })
            }
        }
    }

    /// Issues the single outbound POST and interprets the response.
    ///
    /// Only errors from the transport itself bubble up as `Err`; a non-2xx
    /// status is already a terminal `Failed` outcome.
    async fn post_payload(
        &self,
        payload: &WebhookPayload,
    ) -> Result<RelayOutcome, reqwest::Error> {
        tracing::info!("Forwarding lead to webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Webhook error: {} {}", status, error_text);
            // StatusCode renders as "<code> <reason>", e.g. "500 Internal Server Error"
            return Ok(RelayOutcome::Failed(format!("webhook failed: {}", status)));
        }

        // The webhook may answer with JSON, plain text, or nothing at all
        let text = response.text().await?;
        let data = if text.is_empty() {
            json!({ "received": true })
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!("Webhook response is not JSON: {}", text);
                    json!({ "received": true, "raw": text })
                }
            }
        };

        tracing::info!("Lead delivered to webhook");
        Ok(RelayOutcome::Delivered(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_creation() {
        let relay = WebhookRelay::new("https://example.com/webhook/lead");
        assert!(relay.is_ok());
    }

    #[test]
    fn test_empty_url_is_configuration_error() {
        let relay = WebhookRelay::new("");
        match relay {
            Err(AppError::Configuration(msg)) => {
                assert_eq!(msg, "WEBHOOK_URL is not configured");
            }
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_url_is_configuration_error() {
        let relay = WebhookRelay::new("not a url");
        assert!(matches!(relay, Err(AppError::Configuration(_))));
    }
}
