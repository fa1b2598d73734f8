//! Typed API method requests.

use crate::adapter::TypeAdapter;
use crate::hosts::HostsProvider;
use crate::Error;
use http::Method;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Form parameters of a request. Keys are unique; the last write wins.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`. An absent value removes the parameter instead.
    pub fn add<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        let name = name.into();
        match value {
            Some(value) => {
                self.0.insert(name, value.to_string());
            }
            None => {
                self.0.remove(&name);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn to_form(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

// Values may carry client secrets.
impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Parameters plus the adapter that decodes the response, bound at construction.
pub struct PostRequest<R: 'static> {
    parameters: Parameters,
    adapter: &'static dyn TypeAdapter<R>,
}

impl<R: 'static> PostRequest<R> {
    #[must_use]
    pub fn new(adapter: &'static dyn TypeAdapter<R>) -> Self {
        Self {
            parameters: Parameters::new(),
            adapter,
        }
    }

    pub fn add_parameter<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.parameters.add(name, value);
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub fn adapter(&self) -> &'static dyn TypeAdapter<R> {
        self.adapter
    }
}

impl<R: 'static> Clone for PostRequest<R> {
    fn clone(&self) -> Self {
        Self {
            parameters: self.parameters.clone(),
            adapter: self.adapter,
        }
    }
}

impl<R: 'static> fmt::Debug for PostRequest<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostRequest")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Common trait implemented by every API method request.
pub trait MethodRequest: Send + Sync {
    type Response: Send + 'static;

    fn method(&self) -> Method {
        Method::POST
    }

    /// Absolute endpoint URL. Pure: no I/O.
    fn request_url(&self, hosts: &dyn HostsProvider) -> Result<Url, Error>;

    fn parameters(&self) -> &Parameters;

    fn adapter(&self) -> &'static dyn TypeAdapter<Self::Response>;

    fn parse_response(&self, body: &[u8]) -> Result<Self::Response, Error> {
        self.adapter().from_json(body)
    }
}

/// Fail with [`Error::InvalidArgument`] when `value` is empty.
pub(crate) fn require_non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str, Error> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{name} is null or empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut params = Parameters::new();
        params.add("a", Some("1"));
        params.add("a", Some("2"));
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn absent_value_removes_parameter() {
        let mut params = Parameters::new();
        params.add("secret", Some("x"));
        params.add::<&str>("secret", None);
        params.add::<&str>("other", None);
        assert!(params.is_empty());
    }

    #[test]
    fn non_string_values_are_stringified() {
        let mut params = Parameters::new();
        params.add("flag", Some(true));
        params.add("count", Some(42));
        assert_eq!(params.get("flag"), Some("true"));
        assert_eq!(params.get("count"), Some("42"));
    }

    #[test]
    fn debug_hides_values() {
        let mut params = Parameters::new();
        params.add("client_secret", Some("hunter2"));
        let rendered = format!("{params:?}");
        assert!(rendered.contains("client_secret"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn require_non_empty_rejects_empty() {
        assert!(require_non_empty("", "code").is_err());
        assert_eq!(require_non_empty("abc", "code").unwrap(), "abc");
    }
}
