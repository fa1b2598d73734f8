use crate::types::ErrorCode;
use http::{Method, StatusCode};
use std::{error::Error as StdError, fmt};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy)]
pub struct BodySnippetConfig {
    pub enabled: bool,
    pub max_bytes: usize,
}

impl Default for BodySnippetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: 4096,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidArgument,
    Auth,
    NotFound,
    RateLimited,
    Api,
    Transport,
    MalformedResponse,
    InvalidConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: StatusCode,
    pub method: Method,
    /// Sanitized URL: no query/fragment/userinfo.
    pub url: Box<Url>,
    pub message: Option<Box<str>>,
    /// API error code carried in the body's `error` field, if any.
    pub code: Option<ErrorCode>,
    pub request_id: Option<Box<str>>,
    pub body_snippet: Option<Box<str>>,
}

impl HttpError {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// All errors returned by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was missing or empty. Always a programmer error.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: Box<str> },

    #[error("{0}")]
    Auth(HttpError),

    #[error("{0}")]
    NotFound(HttpError),

    #[error("{0}")]
    RateLimited(HttpError),

    #[error("{0}")]
    Api(HttpError),

    #[error("Transport error during {method} {path}: {source}")]
    Transport {
        method: Method,
        path: Box<str>,
        kind: TransportErrorKind,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// A response payload could not be mapped to the expected model.
    ///
    /// `status` and `path` are filled in by the client; adapters used directly leave them empty.
    #[error("Malformed response{}: {source}", response_context(.status, .path))]
    MalformedResponse {
        status: Option<StatusCode>,
        path: Option<Box<str>>,
        body_snippet: Option<Box<str>>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<Box<str>>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn malformed(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::MalformedResponse {
            status: None,
            path: None,
            body_snippet: None,
            source: source.into(),
        }
    }

    /// Attach response details to a decode failure; other variants pass through.
    pub(crate) fn with_response_context(
        self,
        status: StatusCode,
        path: &str,
        body_snippet: Option<Box<str>>,
    ) -> Self {
        match self {
            Self::MalformedResponse { source, .. } => Self::MalformedResponse {
                status: Some(status),
                path: Some(path.into()),
                body_snippet,
                source,
            },
            other => other,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Auth(_) => ErrorKind::Auth,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::Api(_) => ErrorKind::Api,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth(e) | Self::NotFound(e) | Self::RateLimited(e) | Self::Api(e) => {
                Some(e.status)
            }
            Self::MalformedResponse { status, .. } => *status,
            Self::InvalidArgument { .. } | Self::Transport { .. } | Self::InvalidConfig { .. } => {
                None
            }
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Auth(e) | Self::NotFound(e) | Self::RateLimited(e) | Self::Api(e) => {
                e.request_id.as_deref()
            }
            _ => None,
        }
    }

    /// API error code reported in a non-2xx response body.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Auth(e) | Self::NotFound(e) | Self::RateLimited(e) | Self::Api(e) => e.code,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Whether an external retry layer may safely try again.
    ///
    /// The SDK itself never retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::Api(e) => matches!(
                e.status,
                StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT
            ),
            Self::Transport { kind, .. } => matches!(
                kind,
                TransportErrorKind::Timeout | TransportErrorKind::Connect
            ),
            _ => false,
        }
    }

    pub(crate) fn from_http(error: HttpError) -> Self {
        match error.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth(error),
            StatusCode::NOT_FOUND => Self::NotFound(error),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(error),
            _ => Self::Api(error),
        }
    }
}

struct ResponseContext<'a>(Option<StatusCode>, Option<&'a str>);

fn response_context<'a>(
    status: &Option<StatusCode>,
    path: &'a Option<Box<str>>,
) -> ResponseContext<'a> {
    ResponseContext(*status, path.as_deref())
}

impl fmt::Display for ResponseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0, self.1) {
            (Some(status), Some(path)) => write!(f, " (HTTP {status}, {path})"),
            (Some(status), None) => write!(f, " (HTTP {status})"),
            (None, Some(path)) => write!(f, " ({path})"),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} ({} {})", self.status, self.method, self.path())?;
        if let Some(message) = self.message.as_deref() {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = self.request_id.as_deref() {
            write!(f, " [request-id: {request_id}]")?;
        }
        Ok(())
    }
}
