//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use intake_core::validation::ValidationReport;
use serde_json::json;
use thiserror::Error;

/// An error returned by the submit handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The record failed validation; the report is returned field-by-field so
  /// a form layer can render errors inline.
  #[error("validation failed")]
  Validation(ValidationReport),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The relay rejected the submission (transport failure, backend error
  /// page, or an explicit backend refusal).
  #[error("{message}")]
  Relay {
    message:   String,
    raw_cause: Option<String>,
  },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(report) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
          "success": false,
          "message": "Validation failed",
          "errors": report,
        })),
      )
        .into_response(),
      ApiError::BadRequest(message) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
      )
        .into_response(),
      ApiError::Relay { message, raw_cause } => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
          "success": false,
          "message": message,
          "error": raw_cause,
        })),
      )
        .into_response(),
    }
  }
}
