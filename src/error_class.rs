//! Canonical classes for HTTP failures reported by the Hermes service.
//!
//! The client never retries on its own. The class only carries a hint that
//! applications can feed into their own retry policy.
//!
//! ```rust
//! use hermes_client::ErrorClass;
//!
//! let class = ErrorClass::from_http_status(503);
//! assert_eq!(class, ErrorClass::Overloaded);
//! assert!(class.retryable());
//! assert_eq!(class.name(), "overloaded");
//! ```

use std::fmt;

/// Classification of a non-2xx response by its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// 400 and 422: malformed request or unknown/unloaded model.
    InvalidRequest,
    /// 404: endpoint or model route does not exist.
    NotFound,
    /// 413: prompt exceeds what the service accepts.
    RequestTooLarge,
    /// 429: service is shedding load for this caller.
    RateLimited,
    /// 500 and other unlisted 5xx codes.
    ServerError,
    /// 502 and 503: scheduler saturated or upstream unavailable.
    Overloaded,
    /// 408 and 504: the service gave up before the model finished.
    Timeout,
    /// Anything else.
    Unknown,
}

impl ErrorClass {
    /// Returns the stable snake_case name used in logs.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// Whether repeating the same request later may succeed.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Overloaded | Self::Timeout
        )
    }

    /// Maps an HTTP status code to its class.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            502 | 503 => Self::Overloaded,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
