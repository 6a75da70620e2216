//! Client configuration: base address and per-operation deadlines.

use crate::transport::TransportError;
use std::time::Duration;
use url::Url;

/// Address the service listens on out of the box.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4020";

/// Upper bound for a `generate` call, submission to final byte.
pub const MAX_GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

/// Upper bound for a `status` call, submission to final byte.
pub const MAX_STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable client settings, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    generate_timeout: Duration,
    status_timeout: Duration,
}

impl ClientConfig {
    /// Strips trailing `/` from `base_url`. The address is not parsed here; a
    /// malformed one fails the first call.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            generate_timeout: MAX_GENERATE_TIMEOUT,
            status_timeout: MAX_STATUS_TIMEOUT,
        }
    }

    /// Shortens the `generate` deadline. Values above 60s are clamped.
    pub fn with_generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = timeout.min(MAX_GENERATE_TIMEOUT);
        self
    }

    /// Shortens the `status` deadline. Values above 10s are clamped.
    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout.min(MAX_STATUS_TIMEOUT);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn generate_timeout(&self) -> Duration {
        self.generate_timeout
    }

    pub fn status_timeout(&self) -> Duration {
        self.status_timeout
    }

    /// `<base>/v1/llm/<model>`, with `model` encoded as one path segment.
    pub(crate) fn generate_url(&self, model: &str) -> Result<Url, TransportError> {
        self.endpoint(&["v1", "llm", model])
    }

    /// `<base>/v1/status`.
    pub(crate) fn status_url(&self) -> Result<Url, TransportError> {
        self.endpoint(&["v1", "status"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
