//! Inbound file handling.
//!
//! Browsers hand files over as data URIs (`data:<mime>;base64,<payload>`).
//! The wire contract wants plain base64 with no prefix, and the core record
//! wants real bytes so size limits mean something — so decoding happens here,
//! at the relay boundary, before anything else runs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use intake_core::applicant::DesignFile;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// A design project file as received over HTTP: base64 `data`, possibly
/// still carrying a data-URI prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFile {
  pub name: String,
  #[serde(rename = "type")]
  pub media_type: String,
  pub data: String,
}

/// Decode a wire file into the core representation.
///
/// Malformed base64 is [`RelayError::FileEncoding`]; the caller must treat
/// it as aborting the whole submission before any network call.
pub fn decode_wire_file(wire: &WireFile) -> Result<DesignFile, RelayError> {
  let bytes = B64.decode(strip_data_uri_prefix(&wire.data))?;
  Ok(DesignFile {
    file_name:  wire.name.clone(),
    media_type: wire.media_type.clone(),
    bytes,
  })
}

/// Drop a `data:<mime>;base64,` prefix if one is present; pass plain base64
/// through untouched.
pub fn strip_data_uri_prefix(data: &str) -> &str {
  if let Some(rest) = data.strip_prefix("data:")
    && let Some((_, payload)) = rest.split_once(',')
  {
    return payload;
  }
  data
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_a_data_uri_prefix() {
    assert_eq!(
      strip_data_uri_prefix("data:image/png;base64,AAAA"),
      "AAAA"
    );
    assert_eq!(strip_data_uri_prefix("AAAA"), "AAAA");
    // A stray `data:` with no comma is left alone rather than mangled.
    assert_eq!(strip_data_uri_prefix("data:weird"), "data:weird");
  }

  #[test]
  fn decodes_plain_and_prefixed_payloads_identically() {
    let plain = WireFile {
      name:       "logo.png".to_string(),
      media_type: "image/png".to_string(),
      data:       B64.encode(b"hello"),
    };
    let prefixed = WireFile {
      data: format!("data:image/png;base64,{}", plain.data),
      ..plain.clone()
    };

    let a = decode_wire_file(&plain).unwrap();
    let b = decode_wire_file(&prefixed).unwrap();
    assert_eq!(a.bytes, b"hello");
    assert_eq!(a, b);
  }

  #[test]
  fn malformed_base64_is_a_file_encoding_error() {
    let wire = WireFile {
      name:       "broken.pdf".to_string(),
      media_type: "application/pdf".to_string(),
      data:       "not base64 at all!".to_string(),
    };
    assert!(matches!(
      decode_wire_file(&wire),
      Err(RelayError::FileEncoding(_))
    ));
  }

  #[test]
  fn wire_file_uses_the_contract_key_names() {
    let wire = WireFile {
      name:       "poster.pdf".to_string(),
      media_type: "application/pdf".to_string(),
      data:       "AAAA".to_string(),
    };
    let json = serde_json::to_value(&wire).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "name": "poster.pdf",
        "type": "application/pdf",
        "data": "AAAA",
      })
    );
  }
}
