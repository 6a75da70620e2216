//! Response interpretation shared by the async and blocking clients.

use crate::error_class::ErrorClass;
use crate::transport::RawResponse;
use crate::types::ErrorBody;
use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Turns a completed exchange into a typed value or a classified error.
///
/// The body is parsed as JSON regardless of the declared content type.
pub(crate) fn interpret<T: DeserializeOwned>(
    operation: &'static str,
    response: &RawResponse,
) -> Result<T> {
    if (200..300).contains(&response.status) {
        decode_success(operation, response.status, &response.body)
    } else {
        Err(remote_error(response.status, &response.body))
    }
}

fn decode_success<T: DeserializeOwned>(
    operation: &'static str,
    status: u16,
    body: &[u8],
) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::MalformedResponse {
        status,
        operation,
        reason: e.to_string(),
    })
}

/// Builds the error for a non-2xx response. Uses the `error` field of a JSON
/// body when it is a non-empty string, a generic message otherwise.
pub(crate) fn remote_error(status: u16, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| generic_message(status));
    Error::Remote {
        status,
        class: ErrorClass::from_http_status(status),
        message,
    }
}

fn generic_message(status: u16) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason());
    match reason {
        Some(reason) => format!("HTTP {} {}", status, reason),
        None => format!("HTTP {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerationResult, StatusResult};
    use bytes::Bytes;

    fn raw(status: u16, body: &'static str) -> RawResponse {
        RawResponse {
            status,
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn server_message_is_used_verbatim() {
        let err = remote_error(400, br#"{"error":"model not loaded"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "model not loaded");
        assert_eq!(err.class(), Some(ErrorClass::InvalidRequest));
    }

    #[test]
    fn unparseable_body_gets_generic_message() {
        let err = remote_error(502, b"<html>bad gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.message(), "HTTP 502 Bad Gateway");
    }

    #[test]
    fn missing_or_empty_error_field_gets_generic_message() {
        assert_eq!(remote_error(500, br#"{"detail":"boom"}"#).message(), "HTTP 500 Internal Server Error");
        assert_eq!(remote_error(500, br#"{"error":""}"#).message(), "HTTP 500 Internal Server Error");
        assert_eq!(remote_error(500, br#"{"error":{"code":1}}"#).message(), "HTTP 500 Internal Server Error");
        assert_eq!(remote_error(599, b"").message(), "HTTP 599");
    }

    #[test]
    fn success_without_result_is_malformed() {
        let err = interpret::<GenerationResult>("generate", &raw(200, r#"{"output":"x"}"#))
            .unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn success_with_invalid_json_is_malformed() {
        let err = interpret::<StatusResult>("status", &raw(200, "ok")).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.class().is_none());
    }

    #[test]
    fn any_2xx_is_success() {
        let out: GenerationResult =
            interpret("generate", &raw(201, r#"{"result":"X"}"#)).unwrap();
        assert_eq!(out.result, "X");
    }

    #[test]
    fn redirects_left_unfollowed_are_remote_errors() {
        let err = interpret::<GenerationResult>("generate", &raw(304, "")).unwrap_err();
        assert_eq!(err.status(), Some(304));
        assert_eq!(err.class(), Some(ErrorClass::Unknown));
        assert!(!err.message().is_empty());
    }
}
