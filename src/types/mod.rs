//! Typed shapes of the Hermes wire contract.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`GenerationRequest`] / [`GenerationResult`] | `POST /v1/llm/{model}` |
//! | [`StatusResult`] / [`MemoryInfo`] | `GET /v1/status` |
//!
//! Success bodies are deserialized strictly: a 2xx response missing a required
//! field is reported as a malformed response, never as a default value.

pub mod generation;
pub mod status;

pub use generation::{GenerationRequest, GenerationResult};
pub use status::{MemoryInfo, StatusResult};

use serde::Deserialize;

/// Error payload the service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
