use crate::Error;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Request hook context passed to `ClientBuilder::request_hook`.
///
/// The hook can inspect request parts and mutate headers before the request
/// reaches the executor, e.g. to add an `Authorization` header.
pub struct RequestHookContext<'a> {
    pub method: &'a Method,
    pub url: &'a Url,
    pub headers: &'a mut HeaderMap,
    /// Form fields the executor will encode.
    pub form: &'a [(String, String)],
}

pub type RequestHook =
    Arc<dyn for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static>;
