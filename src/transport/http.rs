use super::TransportError;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Correlation header sent with every call. The service may ignore it.
pub(crate) const REQUEST_ID_HEADER: &str = "x-hermes-request-id";

/// Status line and body of a completed HTTP exchange.
///
/// Only produced when the final byte of the body arrived before the deadline.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Async transport over a pooled `reqwest::Client`.
///
/// Deadlines are per request, so one pooled client serves both operations.
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
        deadline: Duration,
        request_id: &str,
    ) -> Result<RawResponse, TransportError> {
        let req = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id)
            .json(body);
        Self::execute(req, deadline).await
    }

    pub async fn get(
        &self,
        url: Url,
        deadline: Duration,
        request_id: &str,
    ) -> Result<RawResponse, TransportError> {
        let req = self.client.get(url).header(REQUEST_ID_HEADER, request_id);
        Self::execute(req, deadline).await
    }

    async fn execute(
        req: reqwest::RequestBuilder,
        deadline: Duration,
    ) -> Result<RawResponse, TransportError> {
        // reqwest applies the per-request timeout until the body is fully read.
        let response = req
            .timeout(deadline)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, deadline))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(e, deadline))?;
        Ok(RawResponse { status, body })
    }
}

/// Blocking counterpart of [`HttpTransport`].
#[derive(Debug, Clone)]
pub(crate) struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    pub fn post_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
        deadline: Duration,
        request_id: &str,
    ) -> Result<RawResponse, TransportError> {
        let req = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id)
            .json(body);
        Self::execute(req, deadline)
    }

    pub fn get(
        &self,
        url: Url,
        deadline: Duration,
        request_id: &str,
    ) -> Result<RawResponse, TransportError> {
        let req = self.client.get(url).header(REQUEST_ID_HEADER, request_id);
        Self::execute(req, deadline)
    }

    fn execute(
        req: reqwest::blocking::RequestBuilder,
        deadline: Duration,
    ) -> Result<RawResponse, TransportError> {
        let response = req
            .timeout(deadline)
            .send()
            .map_err(|e| TransportError::from_reqwest(e, deadline))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::from_reqwest(e, deadline))?;
        Ok(RawResponse { status, body })
    }
}
