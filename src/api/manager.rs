use crate::api::messages::Backend;
use crate::api::traits::VulcandApi;
use crate::types::errors::ApiError;
use std::sync::Arc;

/// Forwards backend listing to an injected [`VulcandApi`].
///
/// The injection is checked on each call, so a manager can be built empty and
/// wired up later.
#[derive(Clone, Default)]
pub struct VulcandApiManager {
    injected: Option<Arc<dyn VulcandApi>>,
}

impl VulcandApiManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: impl VulcandApi + 'static) -> Self {
        Self {
            injected: Some(Arc::new(client)),
        }
    }

    pub fn inject(&mut self, client: Arc<dyn VulcandApi>) {
        self.injected = Some(client);
    }

    pub fn is_configured(&self) -> bool {
        self.injected.is_some()
    }

    pub async fn list_backends(&self, endpoint: &str) -> Result<Vec<Backend>, ApiError> {
        let client = self.injected.as_ref().ok_or(ApiError::NotConfigured)?;
        client.list_backends(endpoint).await
    }
}
