pub mod api_client;
pub mod auth_service;
pub mod backend;
pub mod enrichment;
pub mod session_store;
pub mod tour_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use backend::TourismBackend;
pub use enrichment::enrich_in_order;
pub use session_store::{BrowserSessionStore, SessionStore, StoredSession};
pub use tour_service::TourService;
