//! The intake session — the form state controller.
//!
//! Owns the draft [`ApplicantRecord`] and the current error report, and walks
//! the submission lifecycle:
//!
//! ```text
//! Draft ──begin_submission──▶ Submitting ──finish(Accepted)──▶ Submitted
//!   ▲                             │
//!   └────────finish(Rejected)─────┘
//! ```
//!
//! `Submitting` is the double-submit guard: a plain flag, not a mutex. There
//! is exactly one submitter per session and no shared mutable state across
//! sessions, so a flag is all the exclusion needed.

use crate::{
  Error, Result,
  applicant::{
    ACCEPTED_MEDIA_TYPES, ApplicantRecord, DesignFile, MAX_DESIGN_FILE_BYTES,
    OtherSociety,
  },
  field::Field,
  outcome::SubmissionOutcome,
  validation::{ValidationReport, validate},
};

// ─── Phase ───────────────────────────────────────────────────────────────────

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
  /// Editable; fields may be set and files attached.
  #[default]
  Draft,
  /// A submission is in flight; the record is frozen and the submit trigger
  /// must stay disabled.
  Submitting,
  /// Terminal; the record was accepted upstream and can never be edited or
  /// resubmitted.
  Submitted(SubmissionOutcome),
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// One candidate's form session, created empty at session start.
#[derive(Debug, Clone, Default)]
pub struct IntakeSession {
  record: ApplicantRecord,
  errors: ValidationReport,
  phase:  Phase,
}

impl IntakeSession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&self) -> &ApplicantRecord {
    &self.record
  }

  /// The error report as of the last `validate` call, adjusted by any
  /// optimistic clearing since.
  pub fn errors(&self) -> &ValidationReport {
    &self.errors
  }

  pub fn phase(&self) -> &Phase {
    &self.phase
  }

  fn ensure_editable(&self) -> Result<()> {
    match self.phase {
      Phase::Draft => Ok(()),
      Phase::Submitting => Err(Error::SubmissionInFlight),
      Phase::Submitted(_) => Err(Error::NotEditable),
    }
  }

  // ── Edits ──────────────────────────────────────────────────────────────

  /// Update one text field.
  ///
  /// Clearing is optimistic: an existing error on the edited field is
  /// removed immediately without re-validating — errors only reappear on
  /// the next full `validate` call. No other field's error is touched.
  pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
    self.ensure_editable()?;
    match field {
      Field::Name => self.record.name = value.to_string(),
      Field::Department => self.record.department = value.to_string(),
      Field::Section => self.record.section = value.to_string(),
      // Phone input strips non-digits at entry; the validator re-checks the
      // ten-digit invariant regardless.
      Field::PhoneNumber => {
        self.record.phone_number =
          value.chars().filter(char::is_ascii_digit).collect();
      }
      Field::Email => self.record.email = value.to_string(),
      Field::Position => self.record.position = value.to_string(),
      Field::OtherSocietyExecom => {
        self.record.other_society_execom = OtherSociety::from_input(value);
      }
      Field::WhichSociety => self.record.which_society = value.to_string(),
      Field::PreviousExperience => {
        self.record.previous_experience = value.to_string();
      }
      Field::GithubLink => self.record.github_link = value.to_string(),
      Field::DesignProjectFile => return Err(Error::NonTextField(field)),
    }
    self.errors.clear_field(field);
    Ok(())
  }

  /// Attach a design project file, enforcing the accepted media types and
  /// the 10 MB limit. The original form documented the limit in UI copy but
  /// never enforced it; here it is a hard constraint.
  pub fn attach_file(&mut self, file: DesignFile) -> Result<()> {
    self.ensure_editable()?;
    if !ACCEPTED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
      return Err(Error::UnsupportedFileType {
        media_type: file.media_type,
      });
    }
    if file.bytes.len() > MAX_DESIGN_FILE_BYTES {
      return Err(Error::FileTooLarge {
        name:  file.file_name,
        size:  file.bytes.len(),
        limit: MAX_DESIGN_FILE_BYTES,
      });
    }
    self.record.design_project_file = Some(file);
    self.errors.clear_field(Field::DesignProjectFile);
    Ok(())
  }

  // ── Validation ─────────────────────────────────────────────────────────

  /// Run the full rule set, replacing (not merging) the stored report.
  pub fn validate(&mut self) -> &ValidationReport {
    self.errors = validate(&self.record);
    &self.errors
  }

  pub fn is_submittable(&self) -> bool {
    validate(&self.record).is_empty()
  }

  // ── Lifecycle ──────────────────────────────────────────────────────────

  /// Freeze the record for submission. Fails if validation is outstanding,
  /// if a submission is already in flight, or if the session is terminal.
  pub fn begin_submission(&mut self) -> Result<&ApplicantRecord> {
    self.ensure_editable()?;
    self.errors = validate(&self.record);
    if !self.errors.is_empty() {
      return Err(Error::NotSubmittable);
    }
    self.phase = Phase::Submitting;
    Ok(&self.record)
  }

  /// Record the relay's outcome. Acceptance is terminal; rejection returns
  /// the session to `Draft` so the candidate can correct and retry.
  pub fn finish_submission(&mut self, outcome: SubmissionOutcome) {
    self.phase = match outcome {
      SubmissionOutcome::Accepted { .. } => Phase::Submitted(outcome),
      SubmissionOutcome::Rejected { .. } => Phase::Draft,
    };
  }
}
