use thiserror::Error;

/// Transport-level failure while dispatching an RSVP.
///
/// The intake endpoint is an opaque sink whose response is never read, so
/// the only failures that exist are the ones raised before or while the
/// request leaves the client.
#[derive(Debug, Clone, Error)]
#[error("rsvp dispatch failed: {message}")]
pub struct DispatchError {
    pub message: String,
}

impl DispatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
