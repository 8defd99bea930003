//! reqwest-backed transport.
//!
//! Issues a single `GET` per call. Successful bodies are parsed as JSON;
//! error bodies are kept as a short message on the envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use super::{Transport, TransportError};
use crate::config::ApiConfig;
use crate::models::ResponseEnvelope;

/// Longest error body we keep as the envelope message.
const MAX_MESSAGE_CHARS: usize = 200;

/// HTTP transport over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the configured timeout and user agent.
    pub fn new(api: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .user_agent(api.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(
        &self,
        url: &str,
    ) -> Result<ResponseEnvelope<serde_json::Value>, TransportError> {
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("{url}: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Request(format!("{url}: failed to read body: {e}")))?;

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string));
            return Ok(ResponseEnvelope::new(status.as_u16(), None, message));
        }

        let payload = if body.trim().is_empty() {
            None
        } else {
            let value = serde_json::from_str(&body)
                .map_err(|e| TransportError::MalformedResponse(format!("{url}: {e}")))?;
            Some(value)
        };

        Ok(ResponseEnvelope::new(status.as_u16(), payload, None))
    }
}

/// Trim an error body down to something fit for a log line.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() <= MAX_MESSAGE_CHARS {
        return Some(trimmed.to_string());
    }
    let mut short: String = trimmed.chars().take(MAX_MESSAGE_CHARS).collect();
    short.push('…');
    Some(short)
}
