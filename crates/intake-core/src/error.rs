//! Error types for `intake-core`.
//!
//! Field-scoped validation errors are *not* represented here — they live in
//! [`crate::validation::ValidationReport`], keyed by field. This enum covers
//! misuse of the session state machine and file-attachment constraint
//! violations only.

use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("the application has already been submitted and can no longer be edited")]
  NotEditable,

  #[error("a submission is already in flight")]
  SubmissionInFlight,

  #[error("the record has outstanding validation errors and cannot be submitted")]
  NotSubmittable,

  #[error("file {name:?} is {size} bytes; the limit is {limit} bytes")]
  FileTooLarge {
    name:  String,
    size:  usize,
    limit: usize,
  },

  #[error(
    "unsupported file type {media_type:?}; accepted types are image/jpeg, image/png and application/pdf"
  )]
  UnsupportedFileType { media_type: String },

  #[error("field {0} does not hold text; attach files with attach_file")]
  NonTextField(Field),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
