//! High-level blocking API client.

use super::{Call, Settings};
use crate::{
    Error, HostsProvider, RequestHookContext, api,
    request::MethodRequest,
    transport::{
        blocking_transport::{BlockingTransport, DynBlockingTransport},
        middleware::HookBlocking,
    },
};
use http::{HeaderMap, HeaderValue, header::HeaderName};
use std::{sync::Arc, time::Duration};

/// Configures and constructs [`BlockingClient`].
pub struct BlockingClientBuilder {
    settings: Settings,
    transport: DynBlockingTransport,
    request_hook: Option<crate::RequestHook>,
}

impl BlockingClientBuilder {
    fn new(hosts: Arc<dyn HostsProvider>, transport: DynBlockingTransport) -> Self {
        Self {
            settings: Settings::new(hosts),
            transport,
            request_hook: None,
        }
    }

    /// Per-request timeout passed on to the executor.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.settings.timeout = value;
        self
    }

    /// Override the default `User-Agent` header.
    pub fn user_agent(mut self, ua: HeaderValue) -> Self {
        self.settings
            .default_headers
            .insert(http::header::USER_AGENT, ua);
        self
    }

    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.settings.default_headers.insert(name, value);
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.settings.default_headers.extend(headers);
        self
    }

    pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
        self.settings.body_snippet.enabled = enabled;
        self
    }

    pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
        self.settings.body_snippet.max_bytes = max_bytes;
        self
    }

    /// Add a hook invoked for every request before it reaches the executor.
    pub fn request_hook<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.request_hook = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn build(self) -> BlockingClient {
        let mut transport = self.transport;

        if let Some(hook) = self.request_hook {
            transport = Arc::new(HookBlocking::new(transport, hook));
        }

        BlockingClient {
            inner: Arc::new(Inner {
                settings: self.settings,
                transport,
            }),
        }
    }
}

#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner>,
}

struct Inner {
    settings: Settings,
    transport: DynBlockingTransport,
}

impl BlockingClient {
    pub fn builder(
        hosts: impl HostsProvider + 'static,
        transport: impl BlockingTransport,
    ) -> BlockingClientBuilder {
        BlockingClientBuilder::new(Arc::new(hosts), Arc::new(transport))
    }

    #[must_use]
    pub fn new(hosts: impl HostsProvider + 'static, transport: impl BlockingTransport) -> Self {
        Self::builder(hosts, transport).build()
    }

    #[must_use]
    pub fn oauth(&self) -> api::BlockingOAuthService {
        api::BlockingOAuthService::new(self.clone())
    }

    /// Send `request` once through the executor and decode its response.
    pub fn execute<R: MethodRequest>(&self, request: &R) -> Result<R::Response, Error> {
        #[cfg(feature = "metrics")]
        let _inflight = crate::transport::metrics::InFlightGuard::new();

        let (call, transport_request) = Call::prepare(request, &self.inner.settings)?;
        let outcome = {
            #[cfg(feature = "tracing")]
            let _enter = call.span().enter();
            self.inner.transport.send(transport_request)
        };
        call.finish(request, &self.inner.settings, outcome)
    }
}
