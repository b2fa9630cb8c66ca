//! HTTP backend: one `POST` per question to the BoilerCompass server.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::gateway::backend::{AssistantBackend, GatewayError};
use crate::gateway::types::{AskRequest, AskResponse};

pub struct HttpBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Builds a backend posting to `endpoint`. `timeout = None` lets requests
    /// run until the server answers or the connection fails.
    /// If the client cannot be built, reqwest defaults are used and the
    /// timeout is lost; the warning says so.
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            match timeout {
                Some(timeout) => warn!(
                    "Failed to build HTTP client ({}), using defaults; \
                     the {:?} request timeout is ignored",
                    e, timeout
                ),
                None => warn!("Failed to build HTTP client ({}), using defaults", e),
            }
            reqwest::Client::new()
        });

        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssistantBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, query: &str) -> Result<String, GatewayError> {
        let request = AskRequest {
            query: query.to_string(),
        };

        info!(
            "Backend request: endpoint={}, query_len={}",
            self.endpoint,
            query.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        debug!("Backend response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GatewayError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let parsed: AskResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Parse(e.to_string()))?;

        info!("Backend reply: {} bytes", parsed.response.len());
        Ok(parsed.response)
    }
}
