use super::{TransportRequest, TransportResponse};
use crate::error::Error;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait implemented by any async HTTP layer.
///
/// Non-2xx statuses are returned as responses; only failures to obtain a
/// response at all (see [`Error::Transport`]) are errors.
#[async_trait]
pub trait AsyncTransport: Send + Sync + 'static {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynAsyncTransport = Arc<dyn AsyncTransport>;

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Arc<T> {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req).await
    }
}
