use crate::BodySnippetConfig;
use crate::types::ErrorCode;
use http::HeaderMap;

use super::redact::{redact_text, truncate_utf8};

pub(crate) fn request_id(headers: &HeaderMap) -> Option<Box<str>> {
    for name in ["x-request-id", "x-correlation-id"] {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string().into_boxed_str());
            }
        }
    }
    None
}

pub(crate) fn extract_message(body: &[u8]) -> Option<Box<str>> {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return None;
    };

    let candidates = ["error_description", "message", "error"];
    for key in candidates {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            let msg = msg.trim();
            if !msg.is_empty() {
                return Some(msg.to_string().into_boxed_str());
            }
        }
    }
    None
}

/// API error code from the body's `error` field.
pub(crate) fn error_code(body: &[u8]) -> Option<ErrorCode> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    value.get("error")?.as_str().map(ErrorCode::parse)
}

pub(crate) fn body_snippet(
    body: &[u8],
    config: BodySnippetConfig,
    secrets: &[&str],
) -> Option<Box<str>> {
    if !config.enabled {
        return None;
    }

    let body = String::from_utf8_lossy(body);
    let snippet = truncate_utf8(&body, config.max_bytes).to_string();
    Some(redact_text(snippet, secrets).into_boxed_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn extract_message_prefers_description() {
        let body = br#"{"error":"invalid_grant","error_description":"code expired"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("code expired"));
        assert_eq!(
            extract_message(br#"{"error":"invalid_grant"}"#).as_deref(),
            Some("invalid_grant")
        );
        assert_eq!(extract_message(b"oops"), None);
    }

    #[test]
    fn error_code_is_parsed_leniently() {
        assert_eq!(
            error_code(br#"{"error":"invalid_grant"}"#),
            Some(ErrorCode::InvalidGrant)
        );
        assert_eq!(
            error_code(br#"{"error":"brand_new"}"#),
            Some(ErrorCode::Unknown)
        );
        assert_eq!(error_code(b"{}"), None);
    }

    #[test]
    fn request_id_skips_blank_values() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("  "));
        headers.insert("x-correlation-id", HeaderValue::from_static("corr-1"));
        assert_eq!(request_id(&headers).as_deref(), Some("corr-1"));
    }

    #[test]
    fn body_snippet_honours_config() {
        let config = BodySnippetConfig {
            enabled: true,
            max_bytes: 4,
        };
        assert_eq!(body_snippet(b"abcdef", config, &[]).as_deref(), Some("abcd"));

        let disabled = BodySnippetConfig {
            enabled: false,
            ..config
        };
        assert_eq!(body_snippet(b"abcdef", disabled, &[]), None);
    }
}
