//! Shared application state for axum handlers.

use std::sync::Arc;

use homelist_app::ports::HomeRepository;
use homelist_app::services::home_service::HomeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<HR> {
    /// Home CRUD service.
    pub home_service: Arc<HomeService<HR>>,
}

impl<HR> Clone for AppState<HR> {
    fn clone(&self) -> Self {
        Self {
            home_service: Arc::clone(&self.home_service),
        }
    }
}

impl<HR> AppState<HR>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(home_service: HomeService<HR>) -> Self {
        Self {
            home_service: Arc::new(home_service),
        }
    }
}
