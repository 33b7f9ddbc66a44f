//! The requiredness function — which fields are mandatory *right now*.
//!
//! Requiredness is not a fixed list: it depends on the currently selected
//! position and the other-society answer. Both the validator and any form
//! layer that wants to render conditional fields derive from this one
//! function, so there is a single source of truth for "what's required now".

use std::collections::BTreeSet;

use crate::{
  applicant::{ApplicantRecord, OtherSociety, Position},
  field::Field,
};

/// Compute the set of required fields for the record as it currently stands.
///
/// Recomputed on demand — never cache the result across edits to `position`
/// or `otherSocietyExecom`.
pub fn required_fields(record: &ApplicantRecord) -> BTreeSet<Field> {
  let mut required = BTreeSet::from([
    Field::Name,
    Field::Department,
    Field::Section,
    Field::PhoneNumber,
    Field::Email,
    Field::Position,
    Field::OtherSocietyExecom,
    Field::PreviousExperience,
  ]);

  match record.selected_position() {
    Some(Position::TechnologyLead) => {
      required.insert(Field::GithubLink);
    }
    Some(Position::DesignLead) => {
      required.insert(Field::DesignProjectFile);
    }
    _ => {}
  }

  if record.other_society_execom == OtherSociety::Yes {
    required.insert(Field::WhichSociety);
  }

  required
}
