//! Submission relay for the IEDC Execom intake system.
//!
//! Turns a submittable [`intake_core::applicant::ApplicantRecord`] into the
//! fixed-shape wire payload the spreadsheet backend expects, POSTs it once
//! (no retries), and normalizes whatever comes back — JSON success, JSON
//! error, or an HTML error page from a misconfigured backend — into a single
//! [`intake_core::outcome::SubmissionOutcome`]. Callers never see raw
//! transport details.

pub mod client;
pub mod error;
pub mod file;
pub mod payload;
pub mod response;

pub use client::{RelayClient, RelayConfig};
pub use error::RelayError;
