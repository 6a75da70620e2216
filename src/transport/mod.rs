//! HTTP transport: sends one request, enforces its deadline, and hands back
//! the raw status and body. Interpreting the body is the client's job.

mod http;

pub(crate) use http::{BlockingHttpTransport, HttpTransport, RawResponse};

use std::time::Duration;

/// Failure to obtain an HTTP response at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request cancelled by caller")]
    Cancelled,

    #[error("invalid base address: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
}

impl TransportError {
    pub(crate) fn from_reqwest(err: reqwest::Error, deadline: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(deadline)
        } else if err.is_connect() {
            TransportError::Connect(err)
        } else {
            TransportError::Http(err)
        }
    }
}
