use crate::transport::{TransportRequest, TransportResponse, async_transport::AsyncTransport};
use crate::{Error, RequestHook, RequestHookContext};
use async_trait::async_trait;

/// Async transport wrapper that executes a request hook before sending.
#[derive(Clone)]
pub struct HookAsync<T> {
    inner: T,
    hook: RequestHook,
}

impl<T> HookAsync<T> {
    pub fn new(inner: T, hook: RequestHook) -> Self {
        Self { inner, hook }
    }
}

#[async_trait]
impl<T: AsyncTransport> AsyncTransport for HookAsync<T> {
    async fn send(&self, mut req: TransportRequest) -> Result<TransportResponse, Error> {
        (self.hook)(RequestHookContext {
            method: &req.method,
            url: &req.url,
            headers: &mut req.headers,
            form: &req.form,
        })?;

        self.inner.send(req).await
    }
}
