//! HTTP executor seam.
//!
//! The SDK performs no network I/O itself. Callers plug in an executor by
//! implementing [`blocking_transport::BlockingTransport`] or
//! [`async_transport::AsyncTransport`] on top of their HTTP stack; the client
//! hands it one fully resolved [`TransportRequest`] per API call and never retries.

use http::{HeaderMap, Method, StatusCode};
use std::time::Duration;
use url::Url;

#[cfg(feature = "async")]
pub mod async_transport;
#[cfg(feature = "blocking")]
pub mod blocking_transport;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
pub mod middleware;

/// One API call, ready to be put on the wire.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Form fields, to be sent as `application/x-www-form-urlencoded`.
    pub form: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Raw response handed back by an executor, whatever its status.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}
