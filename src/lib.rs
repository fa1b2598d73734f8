//! Payment API SDK.
//!
//! Typed models (cards, wallets, tokens), method requests that know their own
//! endpoint and response adapter, and thin clients that hand each request to a
//! caller-supplied HTTP executor.
//!
//! ```no_run
//! use money_api_sdk::{Hosts, MethodRequest, api::TokenRequest};
//!
//! # fn main() -> Result<(), money_api_sdk::Error> {
//! let hosts = Hosts::new("https://auth.example.com", "https://example.com/api")?;
//! let req = TokenRequest::new("temporary-code", "client-id", Some("https://app/cb"))?;
//! assert_eq!(req.request_url(&hosts)?.path(), "/oauth/token");
//! # Ok(())
//! # }
//! ```

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `blocking` (default) or `async`.");

pub mod adapter;
pub mod api;
pub mod client;
pub mod enums;
mod error;
mod hosts;
pub mod request;
mod request_hook;
mod secret;
pub mod transport;
pub mod types;
mod util;

#[cfg(feature = "async")]
pub use client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use client::{BlockingClient, BlockingClientBuilder};
pub use enums::WithCode;
pub use error::{BodySnippetConfig, Error, ErrorKind, HttpError, Result, TransportErrorKind};
pub use hosts::{Hosts, HostsProvider};
pub use request::{MethodRequest, Parameters, PostRequest};
pub use request_hook::{RequestHook, RequestHookContext};
pub use secret::SecretString;
pub use types::*;
