//! URL transport for JSON documents
//!
//! Documents travel in a `data` query parameter as
//! `base64(encodeURIComponent(json))`, the same shape a browser produces with
//! `btoa(encodeURIComponent(json))`, so links built by a web front end decode
//! here unchanged.

use base64::{engine::general_purpose::STANDARD, Engine};
use crate::error::{ApiError, Result};

/// Largest accepted encoded document, in bytes
pub const MAX_ENCODED_SIZE: usize = 2 * 1024 * 1024;

// encodeURIComponent leaves these unescaped, urlencoding does not
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

fn encode_uri_component(text: &str) -> String {
    let mut encoded = urlencoding::encode(text).into_owned();
    for (escaped, mark) in URI_COMPONENT_MARKS {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, mark);
        }
    }
    encoded
}

pub fn encode_json_for_url(json: &str) -> String {
    STANDARD.encode(encode_uri_component(json))
}

/// Every `%` starts a two hex digit escape; urlencoding passes stray ones through
fn has_valid_escapes(component: &str) -> bool {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// Inverse of [`encode_json_for_url`]; `None` if any layer fails to decode
pub fn decode_json_from_url(encoded: &str) -> Option<String> {
    // query string parsing turns an unescaped '+' into a space
    let encoded = encoded.trim().replace(' ', "+");
    let bytes = STANDARD.decode(encoded).ok()?;
    let component = String::from_utf8(bytes).ok()?;
    if !has_valid_escapes(&component) {
        return None;
    }
    urlencoding::decode(&component).ok().map(|s| s.into_owned())
}

/// Reject documents whose encoded form exceeds [`MAX_ENCODED_SIZE`]
pub fn validate_json_size(json: &str) -> Result<()> {
    let encoded_len = encode_json_for_url(json).len();
    if encoded_len > MAX_ENCODED_SIZE {
        return Err(ApiError::TooLarge(encoded_len as f64 / 1024.0 / 1024.0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_browser_encoding() {
        assert_eq!(encode_json_for_url(r#"{"a":1}"#), "JTdCJTIyYSUyMiUzQTElN0Q=");
        assert_eq!(
            encode_json_for_url(r#"["é (x)!"]"#),
            "JTVCJTIyJUMzJUE5JTIwKHgpISUyMiU1RA=="
        );
    }

    #[test]
    fn test_decode_inverts_encode() {
        let json = r#"{"name":"Zoë","tags":["a b","c+d","50%"],"n":null}"#;
        let encoded = encode_json_for_url(json);
        assert_eq!(decode_json_from_url(&encoded).as_deref(), Some(json));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_json_from_url("not base64 !!").is_none());
        // valid base64 of a broken escape sequence
        assert!(decode_json_from_url(&STANDARD.encode("%C3%28")).is_none());
    }

    #[test]
    fn test_decode_rejects_malformed_escapes() {
        for component in ["%zz", "[1]%", "[1]%2", "%G1", "%%41"] {
            assert!(
                decode_json_from_url(&STANDARD.encode(component)).is_none(),
                "{} should not decode",
                component
            );
        }
        assert_eq!(decode_json_from_url(&STANDARD.encode("%5B1%5d")).as_deref(), Some("[1]"));
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_json_size(r#"{"a":1}"#).is_ok());

        let big = format!("\"{}\"", "x".repeat(MAX_ENCODED_SIZE));
        match validate_json_size(&big) {
            Err(ApiError::TooLarge(mb)) => assert!(mb > 2.0),
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }
}
