use crate::SecretString;
use crate::types::ErrorCode;
use serde::{Deserialize, Serialize};

/// Result of exchanging an authorization code.
///
/// Normally exactly one of the fields is set, but both are kept as-is:
/// nothing decides which one wins when the server sends both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<SecretString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorCode>,
}

impl Token {
    #[must_use]
    pub fn new(access_token: Option<SecretString>, error: Option<ErrorCode>) -> Self {
        Self {
            access_token,
            error,
        }
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(SecretString::expose)
    }

    #[must_use]
    pub fn error(&self) -> Option<ErrorCode> {
        self.error
    }
}

/// Acknowledgement of a revoked token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revoked;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_access_token() {
        let token = Token::new(Some("very-secret".into()), None);
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn both_fields_may_be_present() {
        let token: Token =
            serde_json::from_str(r#"{"access_token":"t","error":"invalid_scope"}"#).unwrap();
        assert_eq!(token.access_token(), Some("t"));
        assert_eq!(token.error(), Some(ErrorCode::InvalidScope));
    }

    #[test]
    fn both_fields_may_be_absent() {
        let token: Token = serde_json::from_str("{}").unwrap();
        assert_eq!(token, Token::new(None, None));
    }
}
