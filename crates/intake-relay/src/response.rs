//! Response normalization — the single boundary behind which heterogeneous
//! backend replies (JSON success, JSON error, HTML error page, plain junk)
//! collapse into one uniform shape.
//!
//! Apps-Script-style backends are notorious for answering `200 OK` with an
//! HTML error page when permissions are wrong, so the content type — not the
//! status code — decides how the body is read.

use reqwest::StatusCode;
use scraper::{Html, Selector};
use serde::Deserialize;

/// What the backend said, once normalized. The rest of the system only ever
/// sees this (via the relay client's outcome), never raw transport details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
  pub success:       bool,
  /// Backend-provided or best-effort-extracted message, if any.
  pub message:       Option<String>,
  pub file_uploaded: bool,
  /// Empty-string URLs from the backend are treated as absent.
  pub file_url:      Option<String>,
}

/// The JSON shape a well-behaved backend answers with. A missing `success`
/// key counts as falsy.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawReply {
  success:       bool,
  message:       Option<String>,
  file_uploaded: bool,
  file_url:      Option<String>,
}

/// Normalize one backend response.
///
/// JSON bodies are parsed and trusted for their `success` flag (gated on a
/// 2xx status); anything else is a failure, with the last `<div>`'s inner
/// text scavenged from HTML error pages as a best-effort message. Never
/// panics and never errors — every input maps to a reply.
pub fn parse_relay_response(
  status: StatusCode,
  content_type: Option<&str>,
  body: &str,
) -> BackendReply {
  let is_json = content_type
    .map(|ct| ct.contains("application/json"))
    .unwrap_or(false);

  if !is_json {
    return BackendReply {
      success:       false,
      message:       Some(extract_html_error(body).unwrap_or_else(|| {
        format!("Unexpected non-JSON response from relay backend (HTTP {status})")
      })),
      file_uploaded: false,
      file_url:      None,
    };
  }

  let raw: RawReply = match serde_json::from_str(body) {
    Ok(raw) => raw,
    Err(e) => {
      return BackendReply {
        success:       false,
        message:       Some(format!("Relay backend returned malformed JSON: {e}")),
        file_uploaded: false,
        file_url:      None,
      };
    }
  };

  BackendReply {
    success:       status.is_success() && raw.success,
    message:       raw.message.filter(|m| !m.is_empty()),
    file_uploaded: raw.file_uploaded,
    file_url:      raw.file_url.filter(|url| !url.is_empty()),
  }
}

/// Pull the last `<div>`'s inner text out of an HTML error page.
fn extract_html_error(body: &str) -> Option<String> {
  let document = Html::parse_document(body);
  let divs = Selector::parse("div").ok()?;
  let text = document
    .select(&divs)
    .last()?
    .text()
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .collect::<Vec<_>>()
    .join(" ");
  if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
  use super::*;

  const JSON: Option<&str> = Some("application/json; charset=utf-8");
  const HTML: Option<&str> = Some("text/html; charset=utf-8");

  #[test]
  fn json_success_reply() {
    let reply = parse_relay_response(
      StatusCode::OK,
      JSON,
      r#"{"success":true,"message":"Data saved successfully","fileUploaded":false,"fileUrl":""}"#,
    );
    assert!(reply.success);
    assert_eq!(reply.message.as_deref(), Some("Data saved successfully"));
    assert!(!reply.file_uploaded);
    assert_eq!(reply.file_url, None);
  }

  #[test]
  fn json_success_with_file_url_passes_it_through() {
    let reply = parse_relay_response(
      StatusCode::OK,
      JSON,
      r#"{"success":true,"fileUploaded":true,"fileUrl":"https://drive.example/x"}"#,
    );
    assert!(reply.success);
    assert!(reply.file_uploaded);
    assert_eq!(reply.file_url.as_deref(), Some("https://drive.example/x"));
  }

  #[test]
  fn json_failure_carries_the_backend_message() {
    let reply = parse_relay_response(
      StatusCode::OK,
      JSON,
      r#"{"success":false,"message":"Error: quota exceeded"}"#,
    );
    assert!(!reply.success);
    assert_eq!(reply.message.as_deref(), Some("Error: quota exceeded"));
  }

  #[test]
  fn non_2xx_status_defeats_a_success_flag() {
    let reply = parse_relay_response(
      StatusCode::BAD_GATEWAY,
      JSON,
      r#"{"success":true}"#,
    );
    assert!(!reply.success);
  }

  #[test]
  fn malformed_json_is_a_failure_not_a_panic() {
    let reply =
      parse_relay_response(StatusCode::OK, JSON, "{success: definitely");
    assert!(!reply.success);
    assert!(reply.message.unwrap().contains("malformed JSON"));
  }

  #[test]
  fn html_error_page_yields_the_last_div_text() {
    let body = "<!DOCTYPE html><html><body>\
      <div>Google Apps Script</div>\
      <div>Authorization is required to perform that action.</div>\
      </body></html>";
    let reply = parse_relay_response(StatusCode::OK, HTML, body);
    assert!(!reply.success);
    assert_eq!(
      reply.message.as_deref(),
      Some("Authorization is required to perform that action.")
    );
  }

  #[test]
  fn html_without_divs_falls_back_to_a_generic_message() {
    let reply = parse_relay_response(
      StatusCode::OK,
      HTML,
      "<!DOCTYPE html><html><body><p>nope</p></body></html>",
    );
    assert!(!reply.success);
    let message = reply.message.unwrap();
    assert!(message.contains("non-JSON"), "{message}");
    assert!(!message.is_empty());
  }

  #[test]
  fn missing_content_type_is_treated_as_non_json() {
    let reply = parse_relay_response(StatusCode::OK, None, "whatever");
    assert!(!reply.success);
    assert!(reply.message.is_some());
  }

  #[test]
  fn nested_markup_inside_the_last_div_is_flattened() {
    let body =
      "<html><body><div><b>Error:</b> <span>script timed out</span></div></body></html>";
    let reply = parse_relay_response(StatusCode::OK, HTML, body);
    assert_eq!(reply.message.as_deref(), Some("Error: script timed out"));
  }
}
