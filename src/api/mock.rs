use crate::api::messages::Backend;
use crate::api::traits::{ApiRequest, Transport, VulcandApi};
use crate::types::errors::ApiError;
use async_trait::async_trait;
use hyper::Method;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
    pub headers: HashMap<String, String>,
}

/// Spy transport for testing.
/// Configure raw response bodies per path, then verify calls were made.
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Predefined response bodies for each path
    responses: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    /// Record of all requests made, in order
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// If true, all requests fail with ConnectionFailed
    disconnected: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a raw body for a path.
    pub fn when_called(&self, path: &str, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body.into());
    }

    /// Configure a JSON body for a path.
    pub fn when_called_json(&self, path: &str, body: impl serde::Serialize) {
        let json = serde_json::to_vec(&body).unwrap();
        self.when_called(path, json);
    }

    /// Simulate the API being unreachable.
    pub fn set_disconnected(&self, disconnected: bool) {
        *self.disconnected.lock().unwrap() = disconnected;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get all requests made to a specific path.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    /// Verify a request was made to a path.
    pub fn assert_called(&self, path: &str) {
        let calls = self.requests_to(path);
        assert!(!calls.is_empty(), "Expected call to {} but none found", path);
    }

    /// Verify no requests were made.
    pub fn assert_no_calls(&self) {
        let requests = self.requests.lock().unwrap();
        assert!(
            requests.is_empty(),
            "Expected no calls but found: {:?}",
            requests
        );
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, endpoint: &str, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        // Requests are recorded even when disconnected; the dial was attempted.
        self.requests.lock().unwrap().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            method: request.method,
            path: request.path.clone(),
            body: request
                .body
                .as_deref()
                .map(|b| String::from_utf8_lossy(b).into_owned()),
            headers: request.headers,
        });

        if *self.disconnected.lock().unwrap() {
            return Err(ApiError::ConnectionFailed(format!(
                "{}: connection refused",
                endpoint
            )));
        }

        let responses = self.responses.lock().unwrap();
        Ok(responses.get(&request.path).cloned().unwrap_or_default())
    }
}

/// In-memory stand-in for the backend listing capability.
#[derive(Clone, Default)]
pub struct MockVulcandApi {
    backends: Arc<Mutex<HashMap<String, Vec<Backend>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    disconnected: Arc<Mutex<bool>>,
}

impl MockVulcandApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the backends returned for an endpoint.
    pub fn when_listing(&self, endpoint: &str, backends: Vec<Backend>) {
        self.backends
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), backends);
    }

    pub fn set_disconnected(&self, disconnected: bool) {
        *self.disconnected.lock().unwrap() = disconnected;
    }

    /// Endpoints passed to `list_backends`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VulcandApi for MockVulcandApi {
    async fn list_backends(&self, endpoint: &str) -> Result<Vec<Backend>, ApiError> {
        self.calls.lock().unwrap().push(endpoint.to_string());

        if *self.disconnected.lock().unwrap() {
            return Err(ApiError::ConnectionFailed(format!(
                "{}: connection refused",
                endpoint
            )));
        }

        Ok(self
            .backends
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or_default())
    }
}
