//! The fixed-shape wire payload.
//!
//! The downstream spreadsheet backend appends positional rows, so it depends
//! on key count and order stability: every declared key is present on every
//! submission — `""` for inapplicable strings, `null` for an absent file.
//! Omitting a key rather than sending it empty is a protocol violation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use chrono::{DateTime, Utc};
use intake_core::applicant::{ApplicantRecord, DesignFile};
use serde::{Deserialize, Serialize};

/// One submission as sent to the relay endpoint. Twelve keys, always.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
  pub timestamp:            String,
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
  /// `None` serialises as `null` — never skipped.
  pub design_project_file:  Option<FilePart>,
}

/// The outbound file part: plain base64, no data-URI prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePart {
  pub name: String,
  #[serde(rename = "type")]
  pub media_type: String,
  pub data: String,
}

impl FilePart {
  fn from_design_file(file: &DesignFile) -> Self {
    Self {
      name:       file.file_name.clone(),
      media_type: file.media_type.clone(),
      data:       B64.encode(&file.bytes),
    }
  }
}

impl SubmissionPayload {
  /// Assemble the payload for `record`, stamped with `timestamp`.
  pub fn from_record(record: &ApplicantRecord, timestamp: DateTime<Utc>) -> Self {
    Self {
      timestamp:            timestamp.to_rfc3339(),
      name:                 record.name.clone(),
      department:           record.department.clone(),
      section:              record.section.clone(),
      phone_number:         record.phone_number.clone(),
      email:                record.email.clone(),
      position:             record.position.clone(),
      other_society_execom: record.other_society_execom.as_wire().to_string(),
      which_society:        record.which_society.clone(),
      previous_experience:  record.previous_experience.clone(),
      github_link:          record.github_link.clone(),
      design_project_file:  record
        .design_project_file
        .as_ref()
        .map(FilePart::from_design_file),
    }
  }
}
