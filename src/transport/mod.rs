//! Transport trait and the tagged lookup outcome.
//!
//! Provides an abstraction layer over the HTTP client so the directory
//! can be driven by a canned transport in tests.

pub mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::ResponseEnvelope;

pub use http::HttpTransport;

/// Errors from a single request/response exchange.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// One request/response exchange against a resource URL.
///
/// Implementations issue exactly one outbound request per call and do
/// not retry. The payload is left as raw JSON; callers apply the shape
/// they expect with [`fetch_as`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
    ) -> Result<ResponseEnvelope<serde_json::Value>, TransportError>;
}

/// Fetch `url` and decode the payload into `T`.
///
/// A payload that does not fit `T` is reported as
/// [`TransportError::MalformedResponse`].
pub async fn fetch_as<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
) -> Result<ResponseEnvelope<T>, TransportError> {
    transport
        .fetch(url)
        .await?
        .decode()
        .map_err(|e| TransportError::MalformedResponse(format!("{url}: {e}")))
}

/// Outcome of a lookup, keeping "nothing there" apart from "could not ask".
#[derive(Debug)]
pub enum Lookup<T> {
    /// Status 200 with a payload.
    Found(T),
    /// Any other status, or a 200 without a payload.
    NotFound,
    /// The exchange itself failed.
    TransportFailed(TransportError),
}

impl<T> Lookup<T> {
    /// Classify the result of one exchange.
    pub fn from_exchange(result: Result<ResponseEnvelope<T>, TransportError>) -> Self {
        match result {
            Ok(envelope) => match envelope.into_success_payload() {
                Some(payload) => Lookup::Found(payload),
                None => Lookup::NotFound,
            },
            Err(e) => Lookup::TransportFailed(e),
        }
    }

    /// Collapse to an `Option`, treating a transport failure as absence.
    ///
    /// This is the lenient contract of the directory's `fetch_*`
    /// operations: callers of the result cannot tell "not found" from
    /// "transport failed".
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::TransportFailed(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::TransportFailed(e) => Lookup::TransportFailed(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Lookup::TransportFailed(_))
    }
}
