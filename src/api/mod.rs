//! API method requests and the services that execute them.
//!
//! Requests can be built and inspected on their own; services are exposed
//! via accessors on clients:
//! - `Client::oauth()` / `BlockingClient::oauth()`

pub mod oauth;

pub use oauth::*;
