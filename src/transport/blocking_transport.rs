use super::{TransportRequest, TransportResponse};
use crate::error::Error;
use std::sync::Arc;

/// Trait implemented by any blocking HTTP layer.
///
/// Non-2xx statuses are returned as responses; only failures to obtain a
/// response at all (see [`Error::Transport`]) are errors.
pub trait BlockingTransport: Send + Sync + 'static {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynBlockingTransport = Arc<dyn BlockingTransport>;

impl<T: BlockingTransport + ?Sized> BlockingTransport for Arc<T> {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req)
    }
}
