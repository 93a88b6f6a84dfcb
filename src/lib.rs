//! Client for the Vulcand reverse-proxy control API.
//!
//! CRUD over backends, servers and frontends, one fresh HTTP connection per call.

pub mod api;
pub mod resources;
pub mod types;

pub use api::messages::{Backend, BackendSettings, Frontend, KeepAlive, Server, Timeouts};
pub use api::{VulcandApi, VulcandApiManager, VulcandClient};
pub use types::errors::ApiError;
