//! Base64 response decoding.
//!
//! Each input line carries the captured search response as a base64 string
//! wrapping a JSON document. Decoding is pure: no logging, no I/O.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

/// Errors produced while turning a response cell into JSON.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("response cell is empty")]
    Empty,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a base64-encoded JSON document.
///
/// Surrounding whitespace is ignored. The decoded bytes are parsed directly
/// with `serde_json::from_slice`, so invalid UTF-8 is reported as a JSON error.
pub fn decode_response(encoded: &str) -> Result<Value, DecodeError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = STANDARD.decode(encoded)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encode a JSON value the way captured responses are stored.
///
/// Used by `inspect` round-trips and by tests building fixture lines.
pub fn encode_response(value: &Value) -> String {
    STANDARD.encode(value.to_string())
}
