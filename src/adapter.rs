//! JSON type adapters bridging models and their wire representation.
//!
//! Adapters are stateless; each model has one `'static` instance that every
//! request of that response type shares.

use crate::types::{Card, Revoked, Token, Wallet};
use crate::Error;
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

/// Serializer/deserializer pair for `T`.
pub trait TypeAdapter<T>: Send + Sync {
    fn to_json(&self, value: &T) -> Result<String, Error>;

    /// Decode a response payload; malformed input yields [`Error::MalformedResponse`].
    fn from_json(&self, payload: &[u8]) -> Result<T, Error>;
}

/// Adapter driven by the model's `serde` implementation.
pub struct JsonAdapter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonAdapter<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + DeserializeOwned> TypeAdapter<T> for JsonAdapter<T> {
    fn to_json(&self, value: &T) -> Result<String, Error> {
        serde_json::to_string(value).map_err(|err| Error::InvalidArgument {
            message: format!("value cannot be encoded as JSON: {err}").into_boxed_str(),
        })
    }

    fn from_json(&self, payload: &[u8]) -> Result<T, Error> {
        serde_json::from_slice(payload).map_err(Error::malformed)
    }
}

/// Revocation responses carry no fields; an empty body is the normal case.
pub struct RevokeAdapter;

impl TypeAdapter<Revoked> for RevokeAdapter {
    fn to_json(&self, _value: &Revoked) -> Result<String, Error> {
        Ok("{}".to_owned())
    }

    fn from_json(&self, payload: &[u8]) -> Result<Revoked, Error> {
        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(Revoked);
        }
        serde_json::from_slice::<serde_json::Value>(payload)
            .map(|_| Revoked)
            .map_err(Error::malformed)
    }
}

static TOKEN: JsonAdapter<Token> = JsonAdapter::new();
static CARD: JsonAdapter<Card> = JsonAdapter::new();
static WALLET: JsonAdapter<Wallet> = JsonAdapter::new();
static REVOKE: RevokeAdapter = RevokeAdapter;

#[must_use]
pub fn token() -> &'static dyn TypeAdapter<Token> {
    &TOKEN
}

#[must_use]
pub fn card() -> &'static dyn TypeAdapter<Card> {
    &CARD
}

#[must_use]
pub fn wallet() -> &'static dyn TypeAdapter<Wallet> {
    &WALLET
}

#[must_use]
pub fn revoke() -> &'static dyn TypeAdapter<Revoked> {
    &REVOKE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardType, ErrorCode};
    use crate::{ErrorKind, SecretString};

    #[test]
    fn token_round_trip_preserves_fields() {
        let original = Token::new(Some(SecretString::new("tok")), None);
        let json = token().to_json(&original).unwrap();
        assert_eq!(json, r#"{"access_token":"tok"}"#);

        let decoded = token().from_json(json.as_bytes()).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.access_token(), Some("tok"));
        assert_eq!(decoded.error(), None);
    }

    #[test]
    fn token_error_payload_decodes() {
        let decoded = token().from_json(br#"{"error":"invalid_grant"}"#).unwrap();
        assert_eq!(decoded.access_token(), None);
        assert_eq!(decoded.error(), Some(ErrorCode::InvalidGrant));
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err = token().from_json(b"<html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let err = card().from_json(br#"{"type": 5}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn card_adapter_decodes_wire_fields() {
        let decoded = card()
            .from_json(br#"{"id":"c","pan_fragment":"4111****1111","type":"VISA"}"#)
            .unwrap();
        assert_eq!(decoded.card_type(), CardType::Visa);
        assert_eq!(decoded.id(), Some("c"));
    }

    #[test]
    fn wallet_adapter_handles_missing_id() {
        let decoded = wallet().from_json(b"{}").unwrap();
        assert_eq!(decoded.id(), None);
    }

    #[test]
    fn revoke_adapter_accepts_empty_and_json_bodies() {
        assert_eq!(revoke().from_json(b"").unwrap(), Revoked);
        assert_eq!(revoke().from_json(b" \n").unwrap(), Revoked);
        assert_eq!(revoke().from_json(b"{}").unwrap(), Revoked);
        assert_eq!(
            revoke().from_json(b"not json").unwrap_err().kind(),
            ErrorKind::MalformedResponse
        );
    }
}
