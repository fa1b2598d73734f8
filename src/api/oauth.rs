use crate::adapter::{self, TypeAdapter};
use crate::hosts::HostsProvider;
use crate::request::{MethodRequest, Parameters, PostRequest, require_non_empty};
use crate::types::{Revoked, Token};
use crate::util::url::endpoint_url;
use crate::Error;
use url::Url;

/// `POST {auth_host}/oauth/token`
///
/// Exchanges a temporary authorization code for an access token.
#[derive(Clone, Debug)]
pub struct TokenRequest {
    inner: PostRequest<Token>,
}

impl TokenRequest {
    /// * `code` – temporary code from the authorization redirect.
    /// * `client_id` – application's client id.
    /// * `redirect_uri` – redirect uri registered for the application.
    pub fn new(code: &str, client_id: &str, redirect_uri: Option<&str>) -> Result<Self, Error> {
        Self::with_client_secret(code, client_id, redirect_uri, None)
    }

    /// Same as [`TokenRequest::new`], also sending the application's secret word.
    pub fn with_client_secret(
        code: &str,
        client_id: &str,
        redirect_uri: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Self, Error> {
        let code = require_non_empty(code, "code")?;
        let client_id = require_non_empty(client_id, "clientId")?;

        let mut inner = PostRequest::new(adapter::token());
        inner.add_parameter("code", Some(code));
        inner.add_parameter("client_id", Some(client_id));
        inner.add_parameter("grant_type", Some("authorization_code"));
        inner.add_parameter("redirect_uri", redirect_uri);
        inner.add_parameter("client_secret", client_secret);
        Ok(Self { inner })
    }
}

impl MethodRequest for TokenRequest {
    type Response = Token;

    fn request_url(&self, hosts: &dyn HostsProvider) -> Result<Url, Error> {
        endpoint_url(hosts.auth_host(), ["oauth", "token"])
    }

    fn parameters(&self) -> &Parameters {
        self.inner.parameters()
    }

    fn adapter(&self) -> &'static dyn TypeAdapter<Token> {
        self.inner.adapter()
    }
}

/// `POST {api_host}/revoke`
///
/// Revokes the token the request is authorized with.
#[derive(Clone, Debug)]
pub struct RevokeRequest {
    inner: PostRequest<Revoked>,
}

impl RevokeRequest {
    /// If `revoke_all` is `true`, every token bound to the same authorization is revoked too.
    #[must_use]
    pub fn new(revoke_all: bool) -> Self {
        let mut inner = PostRequest::new(adapter::revoke());
        inner.add_parameter("revoke-all", Some(revoke_all));
        Self { inner }
    }
}

impl Default for RevokeRequest {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MethodRequest for RevokeRequest {
    type Response = Revoked;

    fn request_url(&self, hosts: &dyn HostsProvider) -> Result<Url, Error> {
        endpoint_url(hosts.api_host(), ["revoke"])
    }

    fn parameters(&self) -> &Parameters {
        self.inner.parameters()
    }

    fn adapter(&self) -> &'static dyn TypeAdapter<Revoked> {
        self.inner.adapter()
    }
}

/// OAuth token APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct OAuthService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl OAuthService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `POST /oauth/token`
    pub async fn token(
        &self,
        code: &str,
        client_id: &str,
        redirect_uri: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Token, Error> {
        let req = TokenRequest::with_client_secret(code, client_id, redirect_uri, client_secret)?;
        self.client.execute(&req).await
    }

    /// `POST /revoke`
    pub async fn revoke(&self, revoke_all: bool) -> Result<Revoked, Error> {
        self.client.execute(&RevokeRequest::new(revoke_all)).await
    }
}

/// OAuth token APIs (blocking).
#[derive(Clone)]
#[cfg(feature = "blocking")]
pub struct BlockingOAuthService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingOAuthService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `POST /oauth/token`
    pub fn token(
        &self,
        code: &str,
        client_id: &str,
        redirect_uri: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Token, Error> {
        let req = TokenRequest::with_client_secret(code, client_id, redirect_uri, client_secret)?;
        self.client.execute(&req)
    }

    /// `POST /revoke`
    pub fn revoke(&self, revoke_all: bool) -> Result<Revoked, Error> {
        self.client.execute(&RevokeRequest::new(revoke_all))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::Hosts;
    use crate::ErrorKind;
    use http::Method;

    fn hosts() -> Hosts {
        Hosts::new("https://auth.example.com", "https://example.com/api").unwrap()
    }

    #[test]
    fn token_request_requires_code_and_client_id() {
        let err = TokenRequest::new("", "x", Some("r")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = TokenRequest::new("abc", "", Some("r")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("clientId"));
    }

    #[test]
    fn token_request_parameters() {
        let req = TokenRequest::new("abc", "id1", Some("r")).unwrap();
        let params = req.parameters();

        assert_eq!(params.get("code"), Some("abc"));
        assert_eq!(params.get("client_id"), Some("id1"));
        assert_eq!(params.get("redirect_uri"), Some("r"));
        assert_eq!(params.get("grant_type"), Some("authorization_code"));
        assert!(!params.contains("client_secret"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn token_request_with_secret_and_without_redirect() {
        let req = TokenRequest::with_client_secret("abc", "id1", None, Some("s3")).unwrap();
        let params = req.parameters();

        assert_eq!(params.get("client_secret"), Some("s3"));
        assert!(!params.contains("redirect_uri"));
    }

    #[test]
    fn revoke_parameters() {
        assert_eq!(
            RevokeRequest::default().parameters().get("revoke-all"),
            Some("false")
        );
        assert_eq!(
            RevokeRequest::new(true).parameters().get("revoke-all"),
            Some("true")
        );
    }

    #[test]
    fn urls_come_from_distinct_hosts() {
        let hosts = hosts();
        let token = TokenRequest::new("abc", "id1", Some("r")).unwrap();
        assert_eq!(
            token.request_url(&hosts).unwrap().as_str(),
            "https://auth.example.com/oauth/token"
        );
        assert_eq!(
            RevokeRequest::default().request_url(&hosts).unwrap().as_str(),
            "https://example.com/api/revoke"
        );
    }

    struct RawHosts {
        auth: url::Url,
        api: url::Url,
    }

    impl crate::HostsProvider for RawHosts {
        fn auth_host(&self) -> &url::Url {
            &self.auth
        }

        fn api_host(&self) -> &url::Url {
            &self.api
        }
    }

    #[test]
    fn custom_provider_query_and_fragment_are_not_carried_over() {
        let hosts = RawHosts {
            auth: url::Url::parse("https://auth.example.com/?tenant=a").unwrap(),
            api: url::Url::parse("https://example.com/api#frag").unwrap(),
        };
        let token = TokenRequest::new("abc", "id1", None).unwrap();
        assert_eq!(
            token.request_url(&hosts).unwrap().as_str(),
            "https://auth.example.com/oauth/token"
        );
        assert_eq!(
            RevokeRequest::new(true).request_url(&hosts).unwrap().as_str(),
            "https://example.com/api/revoke"
        );
    }

    #[test]
    fn requests_are_posts() {
        assert_eq!(RevokeRequest::default().method(), Method::POST);
        assert_eq!(
            TokenRequest::new("a", "b", None).unwrap().method(),
            Method::POST
        );
    }

    #[test]
    fn token_request_decodes_through_bound_adapter() {
        let req = TokenRequest::new("abc", "id1", None).unwrap();
        let token = req.parse_response(br#"{"access_token":"tok"}"#).unwrap();
        assert_eq!(token.access_token(), Some("tok"));
    }
}
