//! Ingress handler: redacts a full resume payload and reports what changed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::resume::ResumeRecord;
use crate::redaction::{redact_with_manifest, RedactionManifest};

pub const REDACT_FAILURE_MESSAGE: &str = "Failed to redact resume data";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactSuccess {
    pub success: bool,
    pub data: ResumeRecord,
    pub redacted_fields: RedactionManifest,
}

#[derive(Debug, Serialize)]
pub struct RedactFailure {
    pub success: bool,
    pub error: String,
}

/// Either a fully redacted record or a failure. Never a partial result.
#[derive(Debug)]
pub enum RedactOutcome {
    Redacted(RedactSuccess),
    Failed(RedactFailure),
}

impl IntoResponse for RedactOutcome {
    fn into_response(self) -> Response {
        match self {
            RedactOutcome::Redacted(body) => (StatusCode::OK, Json(body)).into_response(),
            RedactOutcome::Failed(body) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Parses the whole body before touching any field; a payload that does not
/// deserialize into a `ResumeRecord` is rejected outright.
pub fn redact_payload(body: &[u8]) -> RedactOutcome {
    let record: ResumeRecord = match serde_json::from_slice(body) {
        Ok(record) => record,
        Err(e) => {
            warn!("Rejecting redaction payload: {e}");
            return RedactOutcome::Failed(RedactFailure {
                success: false,
                error: REDACT_FAILURE_MESSAGE.to_string(),
            });
        }
    };

    let redacted = redact_with_manifest(&record);
    if redacted.manifest.is_empty() {
        info!("Redaction payload had no personal info to mask");
    } else {
        info!(fields = ?redacted.manifest.names(), "Redacted resume");
    }

    RedactOutcome::Redacted(RedactSuccess {
        success: true,
        data: redacted.record,
        redacted_fields: redacted.manifest,
    })
}

/// POST /api/redact
pub async fn handle_redact(body: Bytes) -> RedactOutcome {
    redact_payload(&body)
}
