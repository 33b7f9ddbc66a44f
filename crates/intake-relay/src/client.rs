//! The relay client — one POST, one normalized outcome.

use chrono::{DateTime, Utc};
use intake_core::{applicant::ApplicantRecord, outcome::SubmissionOutcome};
use reqwest::{Client, header};

use crate::{
  error::RelayError,
  payload::SubmissionPayload,
  response::parse_relay_response,
};

/// The one user-facing message every failure mode collapses into. The
/// distinction between "network unreachable" and "backend returned garbage"
/// lives in `raw_cause` and the logs, never in the UI.
const GENERIC_FAILURE: &str = "Failed to submit application";

/// Connection settings for the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
  /// The external spreadsheet-backend endpoint. Required; an empty value is
  /// a construction-time [`RelayError::Configuration`].
  pub endpoint: String,
}

/// Forwards validated records to the external backend.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Sends a
/// single POST per submission: no retries, and no timeout beyond the
/// transport's own defaults.
#[derive(Clone)]
pub struct RelayClient {
  http:   Client,
  config: RelayConfig,
}

impl RelayClient {
  pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
    if config.endpoint.trim().is_empty() {
      return Err(RelayError::Configuration);
    }
    Ok(Self {
      http: Client::new(),
      config,
    })
  }

  /// The display-only confirmation identifier for a submission accepted at
  /// `at`. Time-based; uniqueness is "good enough for a confirmation page",
  /// nothing stronger.
  pub fn confirmation_id(at: DateTime<Utc>) -> String {
    format!("IEDC_{}", at.timestamp_millis())
  }

  /// Relay one submittable record.
  ///
  /// Never returns an error: every failure mode — unreachable network,
  /// non-2xx status, HTML error page, malformed JSON — collapses into
  /// [`SubmissionOutcome::Rejected`] with the generic user-facing message
  /// and the upstream detail in `raw_cause`.
  pub async fn submit(&self, record: &ApplicantRecord) -> SubmissionOutcome {
    let timestamp = Utc::now();
    let payload = SubmissionPayload::from_record(record, timestamp);
    tracing::debug!(
      position = %payload.position,
      has_file = payload.design_project_file.is_some(),
      "relaying submission"
    );

    let response = match self
      .http
      .post(&self.config.endpoint)
      .json(&payload)
      .send()
      .await
    {
      Ok(response) => response,
      Err(e) => {
        tracing::warn!(error = %e, "relay transport error");
        return SubmissionOutcome::Rejected {
          message:   GENERIC_FAILURE.to_string(),
          raw_cause: Some(e.to_string()),
        };
      }
    };

    let status = response.status();
    let content_type = response
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);
    let body = match response.text().await {
      Ok(body) => body,
      Err(e) => {
        tracing::warn!(error = %e, "failed to read relay response body");
        return SubmissionOutcome::Rejected {
          message:   GENERIC_FAILURE.to_string(),
          raw_cause: Some(e.to_string()),
        };
      }
    };

    let reply = parse_relay_response(status, content_type.as_deref(), &body);
    if reply.success {
      let confirmation_id = Self::confirmation_id(timestamp);
      tracing::info!(%confirmation_id, file_uploaded = reply.file_uploaded, "submission accepted");
      SubmissionOutcome::Accepted {
        confirmation_id,
        timestamp,
        uploaded_file_url: reply.file_url,
      }
    } else {
      tracing::warn!(%status, message = ?reply.message, "submission rejected");
      SubmissionOutcome::Rejected {
        message:   GENERIC_FAILURE.to_string(),
        raw_cause: reply.message.or_else(|| {
          Some(format!("relay responded with HTTP {status}"))
        }),
      }
    }
  }
}
