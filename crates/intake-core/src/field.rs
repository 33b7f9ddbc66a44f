//! Field taxonomy — the applicant-visible fields of the intake form.
//!
//! The serde/display spelling is the wire spelling used both in validation
//! error maps and in the relay payload, so a field name never has to be
//! translated between layers.

use serde::{Deserialize, Serialize};

/// One applicant-visible form field.
///
/// `Section` carries the semester selection (S2..S8); the wire name is
/// `section` for historical reasons and must stay that way — the downstream
/// spreadsheet backend maps it to its "Section" column.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
  Name,
  Department,
  Section,
  PhoneNumber,
  Email,
  Position,
  OtherSocietyExecom,
  WhichSociety,
  PreviousExperience,
  GithubLink,
  DesignProjectFile,
}

impl Field {
  /// All fields, in wire/contract order.
  pub const ALL: [Field; 11] = [
    Field::Name,
    Field::Department,
    Field::Section,
    Field::PhoneNumber,
    Field::Email,
    Field::Position,
    Field::OtherSocietyExecom,
    Field::WhichSociety,
    Field::PreviousExperience,
    Field::GithubLink,
    Field::DesignProjectFile,
  ];
}
