//! The `POST /api/submit` handler — the thin proxy between a form client and
//! the external spreadsheet backend.

use axum::{Json, extract::State, response::IntoResponse};
use intake_core::{
  field::Field,
  outcome::SubmissionOutcome,
  session::IntakeSession,
};
use intake_relay::file::{WireFile, decode_wire_file};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

// ─── Request / response shapes ───────────────────────────────────────────────

/// The inbound submission. Missing keys default to empty, matching clients
/// that omit inapplicable fields instead of sending them blank.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitRequest {
  pub name:                 String,
  pub department:           String,
  pub section:              String,
  pub phone_number:         String,
  pub email:                String,
  pub position:             String,
  pub other_society_execom: String,
  pub which_society:        String,
  pub previous_experience:  String,
  pub github_link:          String,
  pub design_project_file:  Option<WireFile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
  pub success:       bool,
  pub message:       String,
  pub submission_id: String,
  pub timestamp:     String,
  pub file_uploaded: bool,
  pub file_url:      Option<String>,
}

// ─── Handler ─────────────────────────────────────────────────────────────────

/// `POST /api/submit`
///
/// Validates the record with the core rule set, then relays it. Field errors
/// come back as `422` with a field-keyed map; relay failures as `500` with
/// the single user-facing message. The handler itself never panics and never
/// leaks raw transport errors.
pub async fn handler(
  State(state): State<AppState>,
  Json(body): Json<SubmitRequest>,
) -> Result<impl IntoResponse, ApiError> {
  let mut session = IntakeSession::new();
  for (field, value) in [
    (Field::Name, &body.name),
    (Field::Department, &body.department),
    (Field::Section, &body.section),
    (Field::PhoneNumber, &body.phone_number),
    (Field::Email, &body.email),
    (Field::Position, &body.position),
    (Field::OtherSocietyExecom, &body.other_society_execom),
    (Field::WhichSociety, &body.which_society),
    (Field::PreviousExperience, &body.previous_experience),
    (Field::GithubLink, &body.github_link),
  ] {
    session
      .set_field(field, value)
      .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  }

  // Decode and attach the file before validating, so a Design Lead with a
  // bad upload sees one coherent field error instead of a generic failure.
  let mut file_error = None;
  if let Some(wire) = &body.design_project_file {
    match decode_wire_file(wire) {
      Ok(file) => {
        if let Err(e) = session.attach_file(file) {
          file_error = Some(e.to_string());
        }
      }
      Err(e) => {
        tracing::warn!(error = %e, "design project file failed to decode");
        file_error =
          Some("Failed to process uploaded design project file".to_string());
      }
    }
  }

  let mut report = session.validate().clone();
  if let Some(message) = file_error {
    report.insert(Field::DesignProjectFile, message);
  }
  if !report.is_empty() {
    return Err(ApiError::Validation(report));
  }

  // The session lives for one request; begin_submission is still the gate
  // that freezes and re-checks the record before the relay call.
  let record = session
    .begin_submission()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?
    .clone();

  match state.relay.submit(&record).await {
    SubmissionOutcome::Accepted {
      confirmation_id,
      timestamp,
      uploaded_file_url,
    } => Ok(Json(SubmitResponse {
      success:       true,
      message:       "Application submitted successfully".to_string(),
      submission_id: confirmation_id,
      timestamp:     timestamp.to_rfc3339(),
      file_uploaded: uploaded_file_url.is_some(),
      file_url:      uploaded_file_url,
    })),
    SubmissionOutcome::Rejected { message, raw_cause } => {
      Err(ApiError::Relay { message, raw_cause })
    }
  }
}
