//! Payload decoding: base64 to bytes, bytes to text, text to JSON.
//!
//! Each stage fails with its own [`DecodeError`] variant so callers can report
//! precisely which step of the pipeline rejected a malformed export.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use encoding_rs::Encoding;
use serde_json::Value;
use thiserror::Error;

/// Text encodings tried, in order, when the payload is not valid UTF-8.
///
/// Labels are resolved through the WHATWG Encoding Standard, which folds the
/// latin-1 family into windows-1252.
const FALLBACK_ENCODING_LABELS: [&str; 3] = ["latin1", "iso-8859-1", "windows-1252"];

/// Errors arising from payload decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload string is not valid base64.
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not valid text in UTF-8 or any fallback encoding.
    #[error("payload bytes are not decodable in any supported text encoding")]
    Encoding,

    /// The decoded text is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decode a wrapper payload into structured course data.
///
/// # Errors
///
/// Returns [`DecodeError::Base64`] on malformed base64,
/// [`DecodeError::Encoding`] when no supported encoding yields text, and
/// [`DecodeError::Parse`] on malformed JSON.
///
/// # Examples
///
/// ```
/// use risepack::extract::decode_payload;
///
/// // base64 for {"title":"Demo"}
/// let data = decode_payload("eyJ0aXRsZSI6IkRlbW8ifQ==").expect("valid payload");
/// assert_eq!(data["title"], "Demo");
/// ```
pub fn decode_payload(payload: &str) -> Result<Value, DecodeError> {
    let bytes = STANDARD.decode(payload)?;
    let text = decode_text(&bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Decode bytes as UTF-8, falling back across [`FALLBACK_ENCODING_LABELS`].
fn decode_text(bytes: &[u8]) -> Result<String, DecodeError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_owned());
    }
    for label in FALLBACK_ENCODING_LABELS {
        let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
            continue;
        };
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            log::debug!("payload decoded with fallback encoding {}", encoding.name());
            return Ok(text.into_owned());
        }
    }
    Err(DecodeError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use rstest::rstest;

    #[test]
    fn decodes_utf8_json_payload() {
        let payload = STANDARD.encode(r#"{"lessons":[{"id":"a","title":"T"}]}"#);
        let data = decode_payload(&payload).expect("valid payload");
        assert_eq!(data["lessons"][0]["id"], "a");
    }

    #[test]
    fn decodes_windows_1252_fallback() {
        // {"title":"Caf<e-acute>"} in windows-1252: 0xE9 is not valid UTF-8.
        let mut bytes = br#"{"title":"Caf"#.to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(br#""}"#);
        let payload = STANDARD.encode(&bytes);
        let data = decode_payload(&payload).expect("fallback decode");
        assert_eq!(data["title"], "Caf\u{e9}");
    }

    #[test]
    fn malformed_base64_is_base64_error() {
        let result = decode_payload("not//valid==base64!");
        assert!(matches!(result, Err(DecodeError::Base64(_))));
    }

    #[rstest]
    #[case::truncated(r#"{"lessons":"#)]
    #[case::not_json("just some text")]
    fn malformed_json_is_parse_error(#[case] text: &str) {
        let payload = STANDARD.encode(text);
        let result = decode_payload(&payload);
        assert!(matches!(result, Err(DecodeError::Parse(_))));
    }

    #[test]
    fn fallback_labels_all_resolve() {
        for label in FALLBACK_ENCODING_LABELS {
            assert!(Encoding::for_label(label.as_bytes()).is_some(), "{label}");
        }
    }
}
