//! Fire-and-forget dispatch of RSVP payloads to the intake endpoint.

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::DispatchError, protocol::RsvpPayload};
use tracing::debug;

/// Sink for assembled RSVP payloads.
#[async_trait]
pub trait RsvpTransport: Send + Sync {
    /// Ship the payload. `Ok` means the request left without a
    /// transport-level error; nothing about the endpoint's answer is known
    /// or checked.
    async fn dispatch(&self, payload: &RsvpPayload) -> Result<(), DispatchError>;
}

/// HTTP POST transport against the configured intake URL.
pub struct HttpRsvpTransport {
    client: Client,
    endpoint: String,
}

impl HttpRsvpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RsvpTransport for HttpRsvpTransport {
    async fn dispatch(&self, payload: &RsvpPayload) -> Result<(), DispatchError> {
        // The intake suppresses cross-origin response access, so status and
        // body stay unread; dispatch without a transport error is success.
        self.client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| DispatchError::new(err.to_string()))?;
        debug!(endpoint = %self.endpoint, "rsvp payload dispatched");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
