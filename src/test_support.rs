//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::gateway::{AssistantBackend, GatewayError};

/// Answers every query with the same text and records what it was asked.
pub struct FixedBackend {
    reply: String,
    pub queries: Mutex<Vec<String>>,
}

impl FixedBackend {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AssistantBackend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn ask(&self, query: &str) -> Result<String, GatewayError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.reply.clone())
    }
}

/// Fails every query with a preset error kind.
pub enum FailingBackend {
    Api(u16),
    Network,
}

impl FailingBackend {
    pub fn api(status: u16) -> Self {
        FailingBackend::Api(status)
    }

    pub fn network() -> Self {
        FailingBackend::Network
    }
}

#[async_trait]
impl AssistantBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn ask(&self, _query: &str) -> Result<String, GatewayError> {
        Err(match self {
            FailingBackend::Api(status) => GatewayError::Api {
                status: *status,
                message: "simulated".to_string(),
            },
            FailingBackend::Network => GatewayError::Network("connection refused".to_string()),
        })
    }
}
