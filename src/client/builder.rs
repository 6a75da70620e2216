use crate::blocking;
use crate::client::core::HermesClient;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::{Error, Result};
use std::time::Duration;

/// Builder for clients with non-default settings.
///
/// Environment overrides are opt-in through [`from_env`](Self::from_env):
/// - `HERMES_BASE_URL` (default `http://localhost:4020`)
/// - `HERMES_GENERATE_TIMEOUT_SECS` (default and maximum 60)
/// - `HERMES_STATUS_TIMEOUT_SECS` (default and maximum 10)
#[derive(Debug, Clone, Default)]
pub struct HermesClientBuilder {
    base_url: Option<String>,
    generate_timeout: Option<Duration>,
    status_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HermesClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from `HERMES_*` environment variables. Unparseable
    /// values are ignored.
    pub fn from_env() -> Self {
        let secs = |name: &str| {
            std::env::var(name)
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        };
        Self {
            base_url: std::env::var("HERMES_BASE_URL").ok().filter(|s| !s.is_empty()),
            generate_timeout: secs("HERMES_GENERATE_TIMEOUT_SECS"),
            status_timeout: secs("HERMES_STATUS_TIMEOUT_SECS"),
            ..Self::default()
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Deadline for `generate`; clamped to 60s.
    pub fn generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = Some(timeout);
        self
    }

    /// Deadline for `status`; clamped to 10s.
    pub fn status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = Some(timeout);
        self
    }

    /// Bound on TCP/TLS connection setup. Counts against the call deadline.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolved configuration, without building an HTTP client.
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(
            self.base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        if let Some(t) = self.generate_timeout {
            config = config.with_generate_timeout(t);
        }
        if let Some(t) = self.status_timeout {
            config = config.with_status_timeout(t);
        }
        config
    }

    fn user_agent_or_default(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| concat!("hermes-client/", env!("CARGO_PKG_VERSION")).to_string())
    }

    pub fn build(self) -> Result<HermesClient> {
        let mut http = reqwest::Client::builder()
            .user_agent(self.user_agent_or_default())
            // A 3xx is the final answer; following it would send a second request.
            .redirect(reqwest::redirect::Policy::none())
            .pool_idle_timeout(Some(Duration::from_secs(90)));
        if let Some(t) = self.connect_timeout {
            http = http.connect_timeout(t);
        }
        let http = http
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HermesClient::from_parts(self.config(), http))
    }

    /// Builds a [`blocking::HermesClient`]. Must not be called from within an
    /// async runtime.
    pub fn build_blocking(self) -> Result<blocking::HermesClient> {
        let mut http = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent_or_default())
            .redirect(reqwest::redirect::Policy::none())
            .pool_idle_timeout(Some(Duration::from_secs(90)));
        if let Some(t) = self.connect_timeout {
            http = http.connect_timeout(t);
        }
        let http = http
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(blocking::HermesClient::from_parts(self.config(), http))
    }
}
