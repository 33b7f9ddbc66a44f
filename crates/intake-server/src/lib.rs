//! HTTP layer for the IEDC Execom intake system.
//!
//! Exposes an axum [`Router`] with the submit proxy route. Validation lives
//! in `intake-core`; forwarding and response normalization in `intake-relay`.
//! This crate only wires them to HTTP.

pub mod error;
pub mod submit;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use intake_relay::RelayClient;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `INTAKE_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:      String,
  #[serde(default = "default_port")]
  pub port:      u16,
  /// The external spreadsheet-backend endpoint. Required: a missing value
  /// fails deserialisation, an empty one fails relay construction — either
  /// way, startup aborts before any request is served.
  pub relay_url: String,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub relay:  RelayClient,
  pub config: Arc<ServerConfig>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// A 10 MB file grows by a third as base64 and again a little as JSON, so
/// the submit body limit sits well above the file limit itself.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/api/submit", post(submit::handler))
    .route("/api/health", get(health))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// `GET /api/health`
async fn health() -> Json<serde_json::Value> {
  Json(json!({ "ok": true }))
}

// ─── Integration tests ───────────────────────────────────────────────────────
