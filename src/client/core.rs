use super::cancel::CancelSignal;
use super::error_classification::interpret;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, RawResponse, TransportError};
use crate::types::{GenerationRequest, GenerationResult, StatusResult};
use crate::{Error, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Async client for a Hermes service.
///
/// Holds only read-only configuration and a pooled HTTP client, so it is cheap
/// to clone and safe to share across tasks. Each call issues exactly one
/// request; nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct HermesClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) transport: HttpTransport,
}

impl HermesClient {
    /// Client with default deadlines for `base_url`. No network activity.
    ///
    /// # Panics
    ///
    /// If the TLS backend cannot be initialized, as `reqwest::Client::new`
    /// does. Use [`builder`](Self::builder) to get that failure as an error.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder()
            .base_url(base_url)
            .build()
            .expect("failed to initialize HTTP client")
    }

    pub fn builder() -> super::HermesClientBuilder {
        super::HermesClientBuilder::new()
    }

    pub(crate) fn from_parts(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            transport: HttpTransport::new(http),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs `prompt` through `model` and returns the generated text.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<GenerationResult> {
        self.execute_generate(&GenerationRequest::new(model, prompt))
            .await
    }

    /// Same as [`generate`](Self::generate) for an already built request.
    pub async fn execute_generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        request.validate()?;
        let url = self.config.generate_url(&request.model)?;
        let deadline = self.config.generate_timeout();
        let body = request.body();
        self.call("generate", deadline, |request_id| async move {
            debug!(
                operation = "generate",
                model = request.model.as_str(),
                url = %url,
                request_id = request_id.as_str(),
                "hermes-client sending request"
            );
            self.transport
                .post_json(url, &body, deadline, &request_id)
                .await
        })
        .await
    }

    /// Fetches the service health snapshot.
    pub async fn status(&self) -> Result<StatusResult> {
        let url = self.config.status_url()?;
        let deadline = self.config.status_timeout();
        self.call("status", deadline, |request_id| async move {
            debug!(
                operation = "status",
                url = %url,
                request_id = request_id.as_str(),
                "hermes-client sending request"
            );
            self.transport.get(url, deadline, &request_id).await
        })
        .await
    }

    /// [`generate`](Self::generate) that stops as soon as `signal` fires.
    ///
    /// Cancelling drops the in-flight request and yields
    /// `TransportError::Cancelled`. An already cancelled signal sends nothing.
    pub async fn generate_with_cancel(
        &self,
        model: &str,
        prompt: &str,
        signal: CancelSignal,
    ) -> Result<GenerationResult> {
        race_cancel(signal, self.generate(model, prompt)).await
    }

    /// [`status`](Self::status) that stops as soon as `signal` fires.
    pub async fn status_with_cancel(&self, signal: CancelSignal) -> Result<StatusResult> {
        race_cancel(signal, self.status()).await
    }

    async fn call<T, F, Fut>(&self, operation: &'static str, deadline: Duration, send: F) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = std::result::Result<RawResponse, TransportError>>,
    {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        let outcome = send(request_id.clone()).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        complete_call(operation, &request_id, deadline, duration_ms, outcome)
    }
}

async fn race_cancel<T>(mut signal: CancelSignal, call: impl Future<Output = Result<T>>) -> Result<T> {
    if signal.is_cancelled() {
        return Err(TransportError::Cancelled.into());
    }
    tokio::select! {
        biased;
        _ = signal.cancelled() => {
            info!("hermes-client request cancelled by caller");
            Err(TransportError::Cancelled.into())
        }
        out = call => out,
    }
}

/// Interprets the transport outcome and emits the completion event.
pub(crate) fn complete_call<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    request_id: &str,
    deadline: Duration,
    duration_ms: u64,
    outcome: std::result::Result<RawResponse, TransportError>,
) -> Result<T> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            info!(
                operation,
                request_id,
                deadline_ms = deadline.as_millis() as u64,
                duration_ms,
                error = %e,
                "hermes-client transport failure"
            );
            return Err(Error::Transport(e));
        }
    };

    let result = interpret::<T>(operation, &response);
    match &result {
        Ok(_) => info!(
            operation,
            request_id,
            http_status = response.status,
            duration_ms,
            "hermes-client request completed"
        ),
        Err(e @ Error::MalformedResponse { .. }) => warn!(
            operation,
            request_id,
            http_status = response.status,
            duration_ms,
            error = %e,
            "hermes-client received malformed response"
        ),
        Err(e) => info!(
            operation,
            request_id,
            http_status = response.status,
            error_class = e.class().map(|c| c.name()).unwrap_or("unknown"),
            duration_ms,
            "hermes-client request failed"
        ),
    }
    result
}
