//! Request executor: one fresh TCP connection per call, one HTTP/1.1 exchange, raw body out.
//!
//! Uses `hyper` for the HTTP framing over a plain `tokio` stream. Nothing is pooled;
//! the stream and the response body are released before the call returns.

use crate::api::traits::{ApiRequest, Transport};
use crate::types::errors::ApiError;
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HOST};
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use tokio::net::TcpStream;

/// Send a single request to `endpoint` (host:port) and return the full response body.
///
/// `Content-Type: application/json` is always set; `headers` are appended on top of it.
/// The HTTP status is not interpreted, a non-2xx body is returned like any other.
pub async fn execute_request(
    method: Method,
    endpoint: &str,
    path: &str,
    body: Option<&[u8]>,
    headers: Option<&HashMap<String, String>>,
) -> Result<Vec<u8>, ApiError> {
    let request = build_request(method, endpoint, path, body, headers)?;
    let method = request.method().clone();

    let stream = TcpStream::connect(endpoint)
        .await
        .map_err(|e| connection_failed(endpoint, e))?;

    let (mut sender, conn) =
        hyper::client::conn::http1::handshake::<_, Full<Bytes>>(TokioIo::new(stream))
            .await
            .map_err(|e| connection_failed(endpoint, e))?;

    tracing::debug!(%method, endpoint, path, "Vulcand API request");

    let exchange = async move {
        let response = sender
            .send_request(request)
            .await
            .map_err(|e| connection_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, endpoint, path, %status, "Vulcand API returned non-success status");
        }

        let collected = response.into_body().collect().await.map_err(|e| {
            tracing::error!(endpoint, path, error = %e, "Failed to read Vulcand API response");
            ApiError::ResponseRead(e.to_string())
        })?;

        Ok::<_, ApiError>(collected.to_bytes().to_vec())
    };

    // The connection is driven here rather than spawned; it finishes once
    // `sender` is dropped at the end of the exchange.
    let (payload, conn_result) = tokio::join!(exchange, conn);
    if let Err(e) = conn_result {
        tracing::debug!(endpoint, error = %e, "Connection closed with error");
    }

    payload
}

fn build_request(
    method: Method,
    endpoint: &str,
    path: &str,
    body: Option<&[u8]>,
    headers: Option<&HashMap<String, String>>,
) -> Result<Request<Full<Bytes>>, ApiError> {
    let mut builder = Request::builder()
        .method(method.clone())
        .uri(path)
        .header(HOST, endpoint)
        .header(CONTENT_TYPE, "application/json");

    for (name, value) in headers.into_iter().flatten() {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = body.map(Bytes::copy_from_slice).unwrap_or_default();
    builder
        .body(Full::new(body))
        .map_err(|e| ApiError::InvalidRequest(format!("{} {}: {}", method, path, e)))
}

fn connection_failed(endpoint: &str, error: impl std::fmt::Display) -> ApiError {
    tracing::error!(endpoint, error = %error, "Vulcand API connection failed");
    ApiError::ConnectionFailed(format!("{}: {}", endpoint, error))
}

/// Transport backed by [`execute_request`]. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, endpoint: &str, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        execute_request(
            request.method,
            endpoint,
            &request.path,
            request.body.as_deref(),
            Some(&request.headers),
        )
        .await
    }
}
