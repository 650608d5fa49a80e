//! Shared application state for axum handlers.

use std::sync::Arc;

use lightapi_app::ports::{LightingBridge, SocketGateway};
use lightapi_app::services::home_service::HomeService;

/// Application state shared across all axum handlers.
///
/// Generic over the bridge and gateway types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<B, G> {
    /// Home control service, owning the home graph and scene rotation.
    pub home_service: Arc<HomeService<B, G>>,
}

impl<B, G> Clone for AppState<B, G> {
    fn clone(&self) -> Self {
        Self {
            home_service: Arc::clone(&self.home_service),
        }
    }
}

impl<B, G> AppState<B, G>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(home_service: HomeService<B, G>) -> Self {
        Self {
            home_service: Arc::new(home_service),
        }
    }
}
