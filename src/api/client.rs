use crate::api::executor::HttpTransport;
use crate::api::messages::{Backend, Frontend, Server};
use crate::api::traits::{Transport, VulcandApi};
use crate::resources::{backends, frontends, servers};
use crate::types::errors::ApiError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Typed client for the Vulcand `/v2` API.
///
/// Every call takes the endpoint (host:port) and performs exactly one round trip.
/// The client keeps no state about the entities it returns.
#[derive(Clone, Debug, Default)]
pub struct VulcandClient<T: Transport = HttpTransport> {
    transport: T,
    headers: HashMap<String, String>,
}

impl VulcandClient<HttpTransport> {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl<T: Transport> VulcandClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            headers: HashMap::new(),
        }
    }

    /// Adds a header sent with every request, next to `Content-Type`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    // ===== BACKENDS =====

    pub async fn list_backends(&self, endpoint: &str) -> Result<Vec<Backend>, ApiError> {
        backends::list_backends(&self.transport, endpoint, &self.headers).await
    }

    pub async fn get_backend_by_id(
        &self,
        endpoint: &str,
        backend_id: &str,
    ) -> Result<Backend, ApiError> {
        backends::get_backend_by_id(&self.transport, endpoint, backend_id, &self.headers).await
    }

    pub async fn upsert_backend(
        &self,
        endpoint: &str,
        backend: &Backend,
    ) -> Result<Backend, ApiError> {
        backends::upsert_backend(&self.transport, endpoint, backend, &self.headers).await
    }

    pub async fn delete_backend_by_id(
        &self,
        endpoint: &str,
        backend_id: &str,
    ) -> Result<(), ApiError> {
        backends::delete_backend_by_id(&self.transport, endpoint, backend_id, &self.headers).await
    }

    // ===== SERVERS =====

    pub async fn list_servers(
        &self,
        endpoint: &str,
        backend_id: &str,
    ) -> Result<Vec<Server>, ApiError> {
        servers::list_servers(&self.transport, endpoint, backend_id, &self.headers).await
    }

    pub async fn get_server_by_id(
        &self,
        endpoint: &str,
        backend_id: &str,
        server_id: &str,
    ) -> Result<Server, ApiError> {
        servers::get_server_by_id(
            &self.transport,
            endpoint,
            backend_id,
            server_id,
            &self.headers,
        )
        .await
    }

    pub async fn upsert_server(
        &self,
        endpoint: &str,
        backend_id: &str,
        server: &Server,
    ) -> Result<Server, ApiError> {
        servers::upsert_server(&self.transport, endpoint, backend_id, server, &self.headers).await
    }

    pub async fn delete_server_by_id(
        &self,
        endpoint: &str,
        backend_id: &str,
        server_id: &str,
    ) -> Result<(), ApiError> {
        servers::delete_server_by_id(
            &self.transport,
            endpoint,
            backend_id,
            server_id,
            &self.headers,
        )
        .await
    }

    // ===== FRONTENDS =====

    pub async fn list_frontends(&self, endpoint: &str) -> Result<Vec<Frontend>, ApiError> {
        frontends::list_frontends(&self.transport, endpoint, &self.headers).await
    }

    pub async fn get_frontend_by_id(
        &self,
        endpoint: &str,
        frontend_id: &str,
    ) -> Result<Frontend, ApiError> {
        frontends::get_frontend_by_id(&self.transport, endpoint, frontend_id, &self.headers).await
    }

    pub async fn upsert_frontend(
        &self,
        endpoint: &str,
        frontend: &Frontend,
    ) -> Result<Frontend, ApiError> {
        frontends::upsert_frontend(&self.transport, endpoint, frontend, &self.headers).await
    }

    pub async fn delete_frontend_by_id(
        &self,
        endpoint: &str,
        frontend_id: &str,
    ) -> Result<(), ApiError> {
        frontends::delete_frontend_by_id(&self.transport, endpoint, frontend_id, &self.headers)
            .await
    }
}

#[async_trait]
impl<T: Transport> VulcandApi for VulcandClient<T> {
    async fn list_backends(&self, endpoint: &str) -> Result<Vec<Backend>, ApiError> {
        VulcandClient::list_backends(self, endpoint).await
    }
}
