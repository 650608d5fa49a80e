//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use lightapi_app::ports::{LightingBridge, SocketGateway};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the control API routes at `/` next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<B, G>(state: AppState<B, G>) -> Router
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
