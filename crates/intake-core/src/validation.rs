//! Full-record validation.
//!
//! All rules are evaluated independently and unconditionally on every call —
//! no early exit — so the report can carry several simultaneous errors. Each
//! call produces a complete replacement mapping, never a merge with prior
//! errors.

use std::{collections::BTreeMap, str::FromStr};

use serde::Serialize;

use crate::{
  applicant::{
    ApplicantRecord, Department, OtherSociety, Position, Semester,
    variant_list,
  },
  field::Field,
  requiredness::required_fields,
};

// ─── Report ──────────────────────────────────────────────────────────────────

/// Field-keyed validation errors. Absence of an entry means the field is
/// valid; the record is submittable iff the report is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport(BTreeMap<Field, String>);

impl ValidationReport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn message(&self, field: Field) -> Option<&str> {
    self.0.get(&field).map(String::as_str)
  }

  pub fn contains(&self, field: Field) -> bool {
    self.0.contains_key(&field)
  }

  pub fn insert(&mut self, field: Field, message: impl Into<String>) {
    self.0.insert(field, message.into());
  }

  /// Remove one field's entry, leaving every other entry untouched.
  pub fn clear_field(&mut self, field: Field) {
    self.0.remove(&field);
  }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
    self.0.iter().map(|(field, message)| (*field, message.as_str()))
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Validate the whole record and return the full error mapping.
pub fn validate(record: &ApplicantRecord) -> ValidationReport {
  let required = required_fields(record);
  let mut report = ValidationReport::new();

  // Presence, driven by the requiredness function.
  for field in &required {
    if is_blank(record, *field) {
      report.insert(*field, presence_message(*field));
    }
  }

  // Format and closed-set membership, only once a value is present.
  let department = record.department.trim();
  if !department.is_empty() && Department::from_str(department).is_err() {
    report.insert(
      Field::Department,
      format!("Department must be one of {}", variant_list::<Department>()),
    );
  }

  let section = record.section.trim();
  if !section.is_empty() && Semester::from_str(section).is_err() {
    report.insert(
      Field::Section,
      format!("Semester must be one of {}", variant_list::<Semester>()),
    );
  }

  if !record.position.trim().is_empty() && record.selected_position().is_none()
  {
    report.insert(
      Field::Position,
      format!("Position must be one of {}", variant_list::<Position>()),
    );
  }

  // Input handling already strips non-digits; re-check the invariant anyway.
  let phone = record.phone_number.trim();
  if !phone.is_empty()
    && !(phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()))
  {
    report.insert(
      Field::PhoneNumber,
      "Phone number must be exactly 10 digits",
    );
  }

  // Deliberately lax: one `@` is all the original form ever asked for.
  let email = record.email.trim();
  if !email.is_empty() && !email.contains('@') {
    report.insert(Field::Email, "Email must contain @ symbol");
  }

  report
}

fn is_blank(record: &ApplicantRecord, field: Field) -> bool {
  match field {
    Field::Name => record.name.trim().is_empty(),
    Field::Department => record.department.trim().is_empty(),
    Field::Section => record.section.trim().is_empty(),
    Field::PhoneNumber => record.phone_number.trim().is_empty(),
    Field::Email => record.email.trim().is_empty(),
    Field::Position => record.position.trim().is_empty(),
    Field::OtherSocietyExecom => {
      record.other_society_execom == OtherSociety::Unset
    }
    Field::WhichSociety => record.which_society.trim().is_empty(),
    Field::PreviousExperience => record.previous_experience.trim().is_empty(),
    Field::GithubLink => record.github_link.trim().is_empty(),
    Field::DesignProjectFile => record.design_project_file.is_none(),
  }
}

fn presence_message(field: Field) -> &'static str {
  match field {
    Field::Name => "Name is required",
    Field::Department => "Department is required",
    Field::Section => "Semester is required",
    Field::PhoneNumber => "Phone number is required",
    Field::Email => "Email is required",
    Field::Position => "Position is required",
    Field::OtherSocietyExecom => {
      "Please select if you are in any other society execom"
    }
    Field::WhichSociety => "Please specify which society you are part of",
    Field::PreviousExperience => "Previous experience is required",
    Field::GithubLink => "GitHub link is required for Technology Lead position",
    Field::DesignProjectFile => {
      "Recent project upload is required for Design Lead position"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::applicant::DesignFile;

  fn filled_record() -> ApplicantRecord {
    ApplicantRecord {
      name:                "Asha Menon".to_string(),
      department:          "CSE".to_string(),
      section:             "S4".to_string(),
      phone_number:        "9876543210".to_string(),
      email:               "asha@example.com".to_string(),
      position:            "Technology Lead".to_string(),
      other_society_execom: OtherSociety::No,
      which_society:       String::new(),
      previous_experience: "Led 2 hackathons".to_string(),
      github_link:         String::new(),
      design_project_file: None,
    }
  }

  #[test]
  fn technology_lead_without_github_link_is_the_only_error() {
    let report = validate(&filled_record());
    assert_eq!(report.len(), 1);
    assert_eq!(
      report.message(Field::GithubLink),
      Some("GitHub link is required for Technology Lead position")
    );
  }

  #[test]
  fn technology_lead_with_github_link_is_submittable() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();
    assert!(validate(&record).is_empty());
  }

  #[test]
  fn other_positions_do_not_require_extension_fields() {
    let mut record = filled_record();
    record.position = "Finance Lead".to_string();
    assert!(validate(&record).is_empty());
  }

  #[test]
  fn design_lead_requires_an_attached_file() {
    let mut record = filled_record();
    record.position = "Design Lead".to_string();
    let report = validate(&record);
    assert_eq!(report.len(), 1);
    assert_eq!(
      report.message(Field::DesignProjectFile),
      Some("Recent project upload is required for Design Lead position")
    );

    record.design_project_file = Some(DesignFile {
      file_name:  "poster.pdf".to_string(),
      media_type: "application/pdf".to_string(),
      bytes:      vec![1, 2, 3],
    });
    assert!(validate(&record).is_empty());
  }

  #[test]
  fn empty_record_reports_all_base_requirements() {
    let report = validate(&ApplicantRecord::default());
    assert_eq!(report.len(), 8);
    assert_eq!(report.message(Field::Name), Some("Name is required"));
    assert_eq!(report.message(Field::Section), Some("Semester is required"));
    assert_eq!(
      report.message(Field::OtherSocietyExecom),
      Some("Please select if you are in any other society execom")
    );
    assert!(!report.contains(Field::WhichSociety));
  }

  #[test]
  fn validation_is_idempotent() {
    let record = filled_record();
    assert_eq!(validate(&record), validate(&record));
  }

  #[test]
  fn yes_answer_requires_which_society() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();
    record.other_society_execom = OtherSociety::Yes;
    let report = validate(&record);
    assert_eq!(
      report.message(Field::WhichSociety),
      Some("Please specify which society you are part of")
    );

    record.which_society = "IEEE SB".to_string();
    assert!(validate(&record).is_empty());
  }

  #[test]
  fn toggling_other_society_back_to_no_clears_which_society() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();
    record.other_society_execom = OtherSociety::Yes;
    assert!(validate(&record).contains(Field::WhichSociety));

    record.other_society_execom = OtherSociety::No;
    assert!(!validate(&record).contains(Field::WhichSociety));
  }

  #[test]
  fn phone_number_must_be_ten_digits() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();

    record.phone_number = "12345".to_string();
    assert_eq!(
      validate(&record).message(Field::PhoneNumber),
      Some("Phone number must be exactly 10 digits")
    );

    record.phone_number = "98765432101".to_string();
    assert!(validate(&record).contains(Field::PhoneNumber));

    record.phone_number = "98765x4321".to_string();
    assert!(validate(&record).contains(Field::PhoneNumber));
  }

  #[test]
  fn email_rule_is_exactly_one_at_sign_check() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();

    record.email = "not-an-email".to_string();
    assert_eq!(
      validate(&record).message(Field::Email),
      Some("Email must contain @ symbol")
    );

    // Laxity preserved: anything with an `@` passes.
    record.email = "@".to_string();
    assert!(!validate(&record).contains(Field::Email));
  }

  #[test]
  fn unknown_closed_set_values_are_rejected() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();
    record.department = "MBA".to_string();
    record.section = "S1".to_string();
    record.position = "Supreme Lead".to_string();

    let report = validate(&record);
    assert!(report.message(Field::Department).unwrap().contains("CSE"));
    assert!(report.message(Field::Section).unwrap().contains("S2"));
    assert!(
      report.message(Field::Position).unwrap().contains("Technology Lead")
    );
  }

  #[test]
  fn whitespace_only_values_count_as_blank() {
    let mut record = filled_record();
    record.github_link = "https://github.com/asha".to_string();
    record.name = "   ".to_string();
    record.previous_experience = "\t\n".to_string();

    let report = validate(&record);
    assert_eq!(report.message(Field::Name), Some("Name is required"));
    assert_eq!(
      report.message(Field::PreviousExperience),
      Some("Previous experience is required")
    );
  }

  #[test]
  fn report_serialises_with_wire_field_names() {
    let report = validate(&filled_record());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "githubLink": "GitHub link is required for Technology Lead position"
      })
    );
  }
}
