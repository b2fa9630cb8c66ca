//! # Backend Gateway
//!
//! The single request/response exchange with the BoilerCompass server.
//!
//! [`fetch_assistant_reply`] never fails: any transport, status, or body
//! problem is logged and replaced by [`FALLBACK_MESSAGE`], which is shown in
//! the chat like a normal assistant reply.

pub mod backend;
pub mod http;
pub mod types;

use log::warn;

pub use backend::{AssistantBackend, GatewayError};
pub use http::HttpBackend;
pub use types::{AskRequest, AskResponse};

pub const FALLBACK_MESSAGE: &str = "I'm having trouble connecting to my brain right now. \
Please make sure the backend server is running and try again!";

/// Asks `backend` for a reply to `query`, substituting the fallback text on failure.
pub async fn fetch_assistant_reply(backend: &dyn AssistantBackend, query: &str) -> String {
    match backend.ask(query).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Backend '{}' failed: {}", backend.name(), e);
            FALLBACK_MESSAGE.to_string()
        }
    }
}
