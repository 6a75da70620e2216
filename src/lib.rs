//! # hermes-client
//!
//! Typed client for the Hermes LLM service.
//!
//! The service exposes two endpoints and this crate covers both:
//!
//! | Operation | Request | Success value |
//! |-----------|---------|---------------|
//! | [`HermesClient::generate`] | `POST /v1/llm/{model}` | [`GenerationResult`] |
//! | [`HermesClient::status`] | `GET /v1/status` | [`StatusResult`] |
//!
//! Every call issues exactly one request and ends in a typed value or one
//! [`Error`]:
//!
//! - [`Error::Remote`]: the service answered with a non-2xx status. Carries the
//!   status code and the server's `error` message when it sent one.
//! - [`Error::MalformedResponse`]: the service answered 2xx but the body did
//!   not match the documented schema.
//! - [`Error::Transport`]: no response at all (connection failure, deadline
//!   expiry, cancellation). No status code.
//!
//! The client never retries. [`Error::retryable`] is a hint for callers that
//! want their own policy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hermes_client::HermesClient;
//!
//! #[tokio::main]
//! async fn main() -> hermes_client::Result<()> {
//!     let client = HermesClient::new("http://localhost:4020");
//!
//!     let status = client.status().await?;
//!     println!("{} with {} schedulers", status.status, status.schedulers);
//!
//!     let out = client.generate("gemma", "What is Elixir in one sentence?").await?;
//!     println!("{}", out.result);
//!     Ok(())
//! }
//! ```
//!
//! Deadlines default to 60s for `generate` and 10s for `status`. They can be
//! shortened through [`HermesClientBuilder`] but never extended.

pub mod blocking;
pub mod client;
pub mod config;
pub mod error_class;
pub mod transport;
pub mod types;

pub use client::{cancel_pair, CancelHandle, CancelSignal, HermesClient, HermesClientBuilder};
pub use config::ClientConfig;
pub use error_class::ErrorClass;
pub use transport::TransportError;
pub use types::{GenerationRequest, GenerationResult, MemoryInfo, StatusResult};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
