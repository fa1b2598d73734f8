//! Base URLs of the services the SDK talks to.

use crate::Error;
use crate::util::url::normalize_base_url;
use url::Url;

/// Supplies base URLs per logical service.
///
/// Token issuance and the payment API are served by different hosts, so
/// switching between production and a sandbox only means swapping the provider.
pub trait HostsProvider: Send + Sync {
    /// Authorization server (token issuance).
    fn auth_host(&self) -> &Url;

    /// Core payment API.
    fn api_host(&self) -> &Url;
}

/// Fixed pair of base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosts {
    auth: Url,
    api: Url,
}

impl Hosts {
    /// Parse both base URLs. Query strings and fragments are rejected.
    pub fn new(auth: impl AsRef<str>, api: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            auth: normalize_base_url(auth.as_ref(), "auth host")?,
            api: normalize_base_url(api.as_ref(), "api host")?,
        })
    }
}

impl HostsProvider for Hosts {
    fn auth_host(&self) -> &Url {
        &self.auth
    }

    fn api_host(&self) -> &Url {
        &self.api
    }
}

impl<T: HostsProvider + ?Sized> HostsProvider for std::sync::Arc<T> {
    fn auth_host(&self) -> &Url {
        (**self).auth_host()
    }

    fn api_host(&self) -> &Url {
        (**self).api_host()
    }
}
