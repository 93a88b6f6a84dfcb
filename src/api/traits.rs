use crate::api::messages::Backend;
use crate::types::errors::ApiError;
use async_trait::async_trait;
use hyper::Method;
use std::collections::HashMap;

/// One request against the control API: method, path and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Vec<u8>>,
    /// Added on top of `Content-Type: application/json`
    pub headers: HashMap<String, String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    pub fn post(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self::new(Method::POST, path, Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, None)
    }

    fn new(method: Method, path: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            headers: HashMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}

/// Carries a single request to an endpoint and hands back the raw body.
/// Implementations: HttpTransport (production), MockTransport (testing)
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, endpoint: &str, request: ApiRequest) -> Result<Vec<u8>, ApiError>;
}

/// The one operation orchestration code needs from the control API.
/// Implementations: VulcandClient (HTTP), MockVulcandApi (testing)
#[async_trait]
pub trait VulcandApi: Send + Sync {
    async fn list_backends(&self, endpoint: &str) -> Result<Vec<Backend>, ApiError>;
}
