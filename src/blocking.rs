//! Blocking client for callers without an async runtime.
//!
//! Same endpoints, deadlines and error classification as the async
//! [`HermesClient`](crate::HermesClient). Must not be used from inside a tokio
//! runtime; `reqwest::blocking` panics when dropped there.

use crate::client::core::complete_call;
use crate::config::ClientConfig;
use crate::transport::BlockingHttpTransport;
use crate::types::{GenerationRequest, GenerationResult, StatusResult};
use crate::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct HermesClient {
    config: Arc<ClientConfig>,
    transport: BlockingHttpTransport,
}

impl HermesClient {
    /// # Panics
    ///
    /// If the TLS backend cannot be initialized, as
    /// `reqwest::blocking::Client::new` does.
    pub fn new(base_url: impl Into<String>) -> Self {
        crate::HermesClientBuilder::new()
            .base_url(base_url)
            .build_blocking()
            .expect("failed to initialize HTTP client")
    }

    pub(crate) fn from_parts(config: ClientConfig, http: reqwest::blocking::Client) -> Self {
        Self {
            config: Arc::new(config),
            transport: BlockingHttpTransport::new(http),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn generate(&self, model: &str, prompt: &str) -> Result<GenerationResult> {
        self.execute_generate(&GenerationRequest::new(model, prompt))
    }

    pub fn execute_generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        request.validate()?;
        let url = self.config.generate_url(&request.model)?;
        let deadline = self.config.generate_timeout();
        let request_id = Uuid::new_v4().to_string();
        debug!(
            operation = "generate",
            model = request.model.as_str(),
            url = %url,
            request_id = request_id.as_str(),
            "hermes-client sending blocking request"
        );
        let start = Instant::now();
        let outcome = self
            .transport
            .post_json(url, &request.body(), deadline, &request_id);
        let duration_ms = start.elapsed().as_millis() as u64;
        complete_call("generate", &request_id, deadline, duration_ms, outcome)
    }

    pub fn status(&self) -> Result<StatusResult> {
        let url = self.config.status_url()?;
        let deadline = self.config.status_timeout();
        let request_id = Uuid::new_v4().to_string();
        debug!(
            operation = "status",
            url = %url,
            request_id = request_id.as_str(),
            "hermes-client sending blocking request"
        );
        let start = Instant::now();
        let outcome = self.transport.get(url, deadline, &request_id);
        let duration_ms = start.elapsed().as_millis() as u64;
        complete_call("status", &request_id, deadline, duration_ms, outcome)
    }
}
