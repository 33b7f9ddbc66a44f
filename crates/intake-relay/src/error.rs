//! Relay error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
  /// The relay endpoint URL is missing or empty. This is a deployment
  /// misconfiguration, surfaced at construction time — never per request.
  #[error("relay endpoint is not configured")]
  Configuration,

  /// The inbound design project file could not be decoded. Aborts a
  /// submission before any network call is made.
  #[error("failed to decode design project file: {0}")]
  FileEncoding(#[from] base64::DecodeError),
}
