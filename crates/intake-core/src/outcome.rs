//! The terminal result of a relay attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a submission attempt ultimately produced.
///
/// `Accepted` supersedes the draft record: the session that receives it
/// becomes read-only, and there is no resubmission path. `Rejected` carries
/// the single user-facing message plus, where available, the raw upstream
/// detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SubmissionOutcome {
  Accepted {
    /// Time-based identifier, unique enough for display purposes only —
    /// this is not a durability guarantee.
    confirmation_id:   String,
    timestamp:         DateTime<Utc>,
    /// URL of the uploaded design project file, when the backend stored one.
    uploaded_file_url: Option<String>,
  },
  Rejected {
    message:   String,
    raw_cause: Option<String>,
  },
}

impl SubmissionOutcome {
  pub fn is_accepted(&self) -> bool {
    matches!(self, Self::Accepted { .. })
  }
}
