//! Shared fixtures: a mockito server wrapper and raw TCP peers that never
//! answer.

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::net::SocketAddr;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test fixture that manages a mock Hermes server.
pub struct MockHermes {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockHermes {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> hermes_client::HermesClient {
        hermes_client::HermesClient::new(&self.base_url)
    }

    /// Mock for `POST /v1/llm/{model}` that expects `{"prompt": prompt}`.
    pub async fn mock_generate(&mut self, model: &str, prompt: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", format!("/v1/llm/{}", model).as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({ "prompt": prompt })))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    pub async fn mock_status(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", "/v1/status")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Accepts connections and holds them open without ever writing a byte.
pub async fn silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    addr
}

/// Sends response headers promising a body, then stalls mid-body.
pub async fn stalling_body_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            let head = "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 64\r\n\r\n{\"result\":";
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.flush().await;
            held.push(socket);
        }
    });
    addr
}

/// An address nothing is listening on.
pub fn refused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}
