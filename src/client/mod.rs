//! Client implementations (blocking + optional async).

#[cfg(feature = "async")]
pub mod async_client;
#[cfg(feature = "blocking")]
pub mod blocking_client;

#[cfg(feature = "async")]
pub use async_client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use blocking_client::{BlockingClient, BlockingClientBuilder};

use crate::{
    BodySnippetConfig, Error, HostsProvider, HttpError,
    request::MethodRequest,
    transport::{TransportRequest, TransportResponse},
    util::{diagnostics, redact, url::sanitize_url_for_error},
};
use http::{HeaderMap, HeaderValue, Method, header::USER_AGENT};
use std::{sync::Arc, time::Duration};
use url::Url;

#[cfg(feature = "tracing")]
use tracing::field;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration shared by both client flavours.
pub(crate) struct Settings {
    pub(crate) hosts: Arc<dyn HostsProvider>,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: HeaderMap,
    pub(crate) body_snippet: BodySnippetConfig,
}

impl Settings {
    pub(crate) fn new(hosts: Arc<dyn HostsProvider>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        Self {
            hosts,
            timeout: Duration::from_secs(30),
            default_headers,
            body_snippet: BodySnippetConfig::default(),
        }
    }
}

/// State of one API call between building its transport request and decoding the response.
pub(crate) struct Call {
    method: Method,
    url: Url,
    secrets: Vec<String>,
    #[cfg(any(feature = "tracing", feature = "metrics"))]
    start: std::time::Instant,
    #[cfg(feature = "tracing")]
    span: tracing::Span,
}

impl Call {
    pub(crate) fn prepare<R: MethodRequest>(
        request: &R,
        settings: &Settings,
    ) -> Result<(Self, TransportRequest), Error> {
        let method = request.method();
        let url = request.request_url(settings.hosts.as_ref())?;
        let form = request.parameters().to_form();
        let secrets = redact::secrets(&form)
            .into_iter()
            .map(str::to_owned)
            .collect();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "money.request",
            http.method = %method,
            http.host = %url.host_str().unwrap_or_default(),
            http.path = %url.path(),
            http.status = field::Empty,
            request_id = field::Empty,
            latency_ms = field::Empty,
            error_kind = field::Empty,
        );

        let transport_request = TransportRequest {
            method: method.clone(),
            url: url.clone(),
            headers: settings.default_headers.clone(),
            form,
            timeout: settings.timeout,
        };

        Ok((
            Self {
                method,
                url,
                secrets,
                #[cfg(any(feature = "tracing", feature = "metrics"))]
                start: std::time::Instant::now(),
                #[cfg(feature = "tracing")]
                span,
            },
            transport_request,
        ))
    }

    /// Span covering this call; executors run inside it.
    #[cfg(feature = "tracing")]
    pub(crate) fn span(&self) -> &tracing::Span {
        &self.span
    }

    pub(crate) fn finish<R: MethodRequest>(
        self,
        request: &R,
        settings: &Settings,
        outcome: Result<TransportResponse, Error>,
    ) -> Result<R::Response, Error> {
        #[cfg(feature = "tracing")]
        let span = self.span.clone();
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (status, result) = match outcome {
            Ok(resp) => (Some(resp.status), self.decode(request, settings, resp)),
            Err(err) => (err.status(), Err(err)),
        };

        #[cfg(feature = "tracing")]
        {
            if let Some(status) = status {
                self.span.record("http.status", status.as_u16() as i64);
            }
            self.span
                .record("latency_ms", self.start.elapsed().as_millis() as i64);
            if let Err(err) = &result {
                self.span.record("error_kind", field::debug(err.kind()));
                if let Some(rid) = err.request_id() {
                    self.span.record("request_id", field::display(rid));
                }
            }
        }

        #[cfg(feature = "metrics")]
        crate::transport::metrics::record_outcome(
            &self.method,
            status,
            self.start.elapsed(),
            result.as_ref().err().map(Error::kind),
        );

        #[cfg(not(any(feature = "tracing", feature = "metrics")))]
        let _ = status;

        result
    }

    fn decode<R: MethodRequest>(
        &self,
        request: &R,
        settings: &Settings,
        resp: TransportResponse,
    ) -> Result<R::Response, Error> {
        let secrets: Vec<&str> = self.secrets.iter().map(String::as_str).collect();

        if resp.status.is_client_error() || resp.status.is_server_error() {
            let message = diagnostics::extract_message(&resp.body)
                .map(|msg| redact::redact_text(msg.into(), &secrets).into_boxed_str());
            return Err(Error::from_http(HttpError {
                status: resp.status,
                method: self.method.clone(),
                url: Box::new(sanitize_url_for_error(&self.url)),
                message,
                code: diagnostics::error_code(&resp.body),
                request_id: diagnostics::request_id(&resp.headers),
                body_snippet: diagnostics::body_snippet(&resp.body, settings.body_snippet, &secrets),
            }));
        }

        request.parse_response(&resp.body).map_err(|err| {
            err.with_response_context(
                resp.status,
                self.url.path(),
                diagnostics::body_snippet(&resp.body, settings.body_snippet, &secrets),
            )
        })
    }
}
