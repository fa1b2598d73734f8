use crate::enums::{self, WithCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error codes reported by the API in the `error` field of a response.
///
/// Codes outside the known set parse to [`ErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ErrorCode {
    // OAuth2 token endpoint
    InvalidRequest,
    UnauthorizedClient,
    InvalidGrant,
    InvalidScope,
    InvalidToken,
    InsufficientScope,
    AuthorizationReject,
    AlreadyAuthorized,

    // Payments
    IllegalParams,
    PhoneUnknown,
    PaymentRefused,
    PayeeNotFound,
    LimitExceeded,
    ContractNotFound,
    NotEnoughFunds,
    MoneySourceNotAvailable,
    AccountBlocked,
    ExtActionRequired,

    TechnicalError,
    #[default]
    Unknown,
}

impl ErrorCode {
    #[must_use]
    pub fn parse(code: &str) -> Self {
        enums::parse(code, Self::Unknown, Self::VALUES)
    }

    /// Whether the error is expected to clear up on its own.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TechnicalError)
    }
}

impl WithCode for ErrorCode {
    const VALUES: &'static [Self] = &[
        Self::InvalidRequest,
        Self::UnauthorizedClient,
        Self::InvalidGrant,
        Self::InvalidScope,
        Self::InvalidToken,
        Self::InsufficientScope,
        Self::AuthorizationReject,
        Self::AlreadyAuthorized,
        Self::IllegalParams,
        Self::PhoneUnknown,
        Self::PaymentRefused,
        Self::PayeeNotFound,
        Self::LimitExceeded,
        Self::ContractNotFound,
        Self::NotEnoughFunds,
        Self::MoneySourceNotAvailable,
        Self::AccountBlocked,
        Self::ExtActionRequired,
        Self::TechnicalError,
        Self::Unknown,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::InvalidGrant => "invalid_grant",
            Self::InvalidScope => "invalid_scope",
            Self::InvalidToken => "invalid_token",
            Self::InsufficientScope => "insufficient_scope",
            Self::AuthorizationReject => "authorization_reject",
            Self::AlreadyAuthorized => "already_authorized",
            Self::IllegalParams => "illegal_params",
            Self::PhoneUnknown => "phone_unknown",
            Self::PaymentRefused => "payment_refused",
            Self::PayeeNotFound => "payee_not_found",
            Self::LimitExceeded => "limit_exceeded",
            Self::ContractNotFound => "contract_not_found",
            Self::NotEnoughFunds => "not_enough_funds",
            Self::MoneySourceNotAvailable => "money_source_not_available",
            Self::AccountBlocked => "account_blocked",
            Self::ExtActionRequired => "ext_action_required",
            Self::TechnicalError => "technical_error",
            Self::Unknown => "unknown",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        enums::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enums::deserialize(deserializer, Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = ErrorCode::VALUES.iter().map(WithCode::code).collect();
        assert_eq!(codes.len(), ErrorCode::VALUES.len());
    }

    #[test]
    fn parse_round_trips_known_codes() {
        for code in ErrorCode::VALUES {
            assert_eq!(ErrorCode::parse(code.code()), *code);
        }
    }

    #[test]
    fn new_server_codes_degrade_to_unknown() {
        assert_eq!(ErrorCode::parse("slow_down"), ErrorCode::Unknown);
        let decoded: ErrorCode = serde_json::from_str("\"temporarily_unavailable\"").unwrap();
        assert_eq!(decoded, ErrorCode::Unknown);
    }
}
