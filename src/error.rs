use crate::error_class::ErrorClass;
use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for Hermes calls.
///
/// Every call ends in exactly one of three outcomes besides success: the
/// service answered with a non-2xx status (`Remote`), the service answered 2xx
/// with a body that does not match the documented schema (`MalformedResponse`),
/// or no response was obtained at all (`Transport`). `Validation` and
/// `Configuration` are raised locally before any request is sent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Remote error: HTTP {status} ({class}): {message}")]
    Remote {
        status: u16,
        class: ErrorClass,
        message: String,
    },

    #[error("Malformed response: HTTP {status} from {operation}: {reason}")]
    MalformedResponse {
        status: u16,
        operation: &'static str,
        reason: String,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status code of the response that terminated the call.
    ///
    /// `None` for transport failures and local errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } | Error::MalformedResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Human-readable message. For `Remote` this is the server-supplied
    /// `error` field when one was present.
    pub fn message(&self) -> String {
        match self {
            Error::Remote { message, .. } => message.clone(),
            Error::MalformedResponse { reason, .. } => reason.clone(),
            Error::Transport(e) => e.to_string(),
            Error::Validation { message } | Error::Configuration { message } => message.clone(),
        }
    }

    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            Error::Remote { class, .. } => Some(*class),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Timeout(_)))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Cancelled))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedResponse { .. })
    }

    /// Retry hint for callers. Transport failures other than cancellation are
    /// considered transient; remote errors defer to their class.
    pub fn retryable(&self) -> bool {
        match self {
            Error::Remote { class, .. } => class.retryable(),
            Error::Transport(TransportError::Cancelled) => false,
            Error::Transport(TransportError::InvalidUrl(_)) => false,
            Error::Transport(_) => true,
            _ => false,
        }
    }
}
