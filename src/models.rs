use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw lead submission as received from the form.
///
/// Untrusted input: four named string fields with no constraints applied yet.
/// Run it through [`crate::validation::validate`] to obtain a [`LeadRecord`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// A lead that passed validation.
///
/// Construction goes through [`crate::validation::validate`], so holding a
/// `LeadRecord` means every field satisfies its constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// JSON body sent to the automation webhook.
///
/// Field values are copied verbatim from the validated record; `timestamp`
/// is stamped at send time (RFC 3339 via chrono's serde support).
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub timestamp: DateTime<Utc>,
}

impl WebhookPayload {
    /// Builds the outbound payload from a validated record, stamping the
    /// current instant.
    pub fn from_record(record: &LeadRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            company: record.company.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Terminal outcome of one relay invocation.
///
/// Transport and remote failures always land here as `Failed`; they are
/// never raised past the relay boundary. Validation and configuration
/// errors are NOT outcomes - those propagate as typed errors before any
/// network call happens.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The webhook accepted the lead; carries the (possibly synthesized)
    /// response payload.
    Delivered(Value),
    /// The webhook rejected the lead or the call itself failed.
    Failed(String),
}

/// Uniform response body returned to the form.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<RelayOutcome> for SubmitResponse {
    fn from(outcome: RelayOutcome) -> Self {
        match outcome {
            RelayOutcome::Delivered(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            RelayOutcome::Failed(message) => Self {
                success: false,
                data: None,
                error: Some(message),
            },
        }
    }
}
