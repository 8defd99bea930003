//! Per-request response wrapper.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Status code treated as success by the directory.
pub const STATUS_OK: u16 = 200;

/// The outcome of one request/response exchange.
///
/// Lives only for the duration of the exchange; nothing persists it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope<T> {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body, if the server sent one.
    pub payload: Option<T>,
    /// Human-readable detail, usually the error body or reason phrase.
    pub message: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    pub fn new(status: u16, payload: Option<T>, message: Option<String>) -> Self {
        Self {
            status,
            payload,
            message,
        }
    }

    /// Shorthand for a 200 response carrying `payload`.
    pub fn ok(payload: T) -> Self {
        Self::new(STATUS_OK, Some(payload), None)
    }

    /// Shorthand for a response without a body.
    pub fn empty(status: u16) -> Self {
        Self::new(status, None, None)
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The payload, but only when the status is a success.
    pub fn into_success_payload(self) -> Option<T> {
        if self.is_success() { self.payload } else { None }
    }
}

impl ResponseEnvelope<serde_json::Value> {
    /// Decode the raw JSON payload into the declared response shape.
    ///
    /// Status and message carry over untouched. A missing payload stays
    /// missing.
    pub fn decode<U: DeserializeOwned>(self) -> Result<ResponseEnvelope<U>, serde_json::Error> {
        let payload = self.payload.map(serde_json::from_value).transpose()?;
        Ok(ResponseEnvelope {
            status: self.status,
            payload,
            message: self.message,
        })
    }
}
