pub mod client;
pub mod executor;
pub mod manager;
pub mod messages;
pub mod mock;
pub mod traits;

pub use client::VulcandClient;
pub use executor::{execute_request, HttpTransport};
pub use manager::VulcandApiManager;
pub use mock::{MockTransport, MockVulcandApi};
pub use traits::{ApiRequest, Transport, VulcandApi};
