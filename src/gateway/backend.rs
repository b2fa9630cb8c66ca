use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while talking to the assistant backend.
/// None of these reach the UI; the gateway turns them into the fallback reply.
#[derive(Debug)]
pub enum GatewayError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected `{ "response": ... }` JSON.
    Parse(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Api { status, message } => {
                write!(f, "backend error (HTTP {status}): {message}")
            }
            GatewayError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Returns the name of the backend (for logging).
    fn name(&self) -> &str;

    /// Sends `query` and returns the assistant's reply text as-is.
    async fn ask(&self, query: &str) -> Result<String, GatewayError>;
}
