//! The applicant record and its closed value sets.
//!
//! Draft fields stay `String` on purpose: values arrive from a form layer as
//! raw text, and the validator (not the type system) reports membership
//! errors against the closed sets below. The enums are the single source of
//! truth for what those sets contain.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

// ─── Closed sets ─────────────────────────────────────────────────────────────

/// Departments eligible to apply.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::VariantArray,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Department {
  Cse,
  Ai,
  Ds,
  Eee,
  Ece,
  Ebe,
  Ce,
  Me,
}

/// Semesters eligible to apply. S1 students are excluded by policy.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::VariantArray,
)]
pub enum Semester {
  S2,
  S3,
  S4,
  S5,
  S6,
  S7,
  S8,
}

/// The ten executive-committee positions open for application.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::VariantArray,
)]
pub enum Position {
  #[strum(serialize = "IEDC Lead")]
  IedcLead,
  #[strum(serialize = "Event Lead and IPR")]
  EventLeadAndIpr,
  #[strum(serialize = "Technology Lead")]
  TechnologyLead,
  #[strum(serialize = "Quality and Operations Lead")]
  QualityAndOperationsLead,
  #[strum(serialize = "Finance Lead")]
  FinanceLead,
  #[strum(serialize = "Creative and Innovation Lead")]
  CreativeAndInnovationLead,
  #[strum(serialize = "Design Lead")]
  DesignLead,
  #[strum(serialize = "Community Lead")]
  CommunityLead,
  #[strum(serialize = "Branding and Marketing Lead")]
  BrandingAndMarketingLead,
  #[strum(serialize = "Women Entrepreneurship Lead")]
  WomenEntrepreneurshipLead,
}

/// Tri-state answer to "are you in another society's execom?".
///
/// `Unset` is the freshly-created state; selecting either answer is itself a
/// validation requirement, and a `Yes` makes `whichSociety` required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OtherSociety {
  Yes,
  No,
  #[default]
  Unset,
}

impl OtherSociety {
  /// Parse a raw form value. Anything other than the two literal answers
  /// resets to `Unset`, matching a cleared dropdown.
  pub fn from_input(value: &str) -> Self {
    match value.trim() {
      "Yes" => Self::Yes,
      "No" => Self::No,
      _ => Self::Unset,
    }
  }

  /// The wire representation — `""` while unanswered.
  pub fn as_wire(&self) -> &'static str {
    match self {
      Self::Yes => "Yes",
      Self::No => "No",
      Self::Unset => "",
    }
  }
}

// ─── Design project file ─────────────────────────────────────────────────────

/// Upper bound on an attached design project file, enforced at attach time.
pub const MAX_DESIGN_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Media types accepted for the design project slot.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] =
  ["image/jpeg", "image/png", "application/pdf"];

/// A decoded design project file held in the draft record.
#[derive(Clone, PartialEq, Eq)]
pub struct DesignFile {
  pub file_name:  String,
  pub media_type: String,
  pub bytes:      Vec<u8>,
}

impl std::fmt::Debug for DesignFile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DesignFile")
      .field("file_name", &self.file_name)
      .field("media_type", &self.media_type)
      .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
      .finish()
  }
}

// ─── Applicant record ────────────────────────────────────────────────────────

/// The mutable draft record for one candidate's submission.
///
/// Created empty at session start and mutated field-by-field; the set of
/// *required* fields is a function of `position` and `other_society_execom`
/// (see [`crate::requiredness::required_fields`]), never a fixed list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantRecord {
  pub name:                String,
  pub department:          String,
  /// Semester selection (S2..S8). Wire name `section`.
  pub section:             String,
  pub phone_number:        String,
  pub email:               String,
  pub position:            String,
  pub other_society_execom: OtherSociety,
  pub which_society:       String,
  pub previous_experience: String,
  pub github_link:         String,
  pub design_project_file: Option<DesignFile>,
}

impl ApplicantRecord {
  /// The position as a member of the closed set, if the draft value parses.
  pub fn selected_position(&self) -> Option<Position> {
    Position::from_str(self.position.trim()).ok()
  }
}

/// Comma-separated members of a closed set, for validation messages.
pub fn variant_list<T>() -> String
where
  T: VariantArray + std::fmt::Display,
{
  T::VARIANTS
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}
