//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod lamps;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use std::str::FromStr;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use lightapi_app::ports::{LightingBridge, SocketGateway};
use lightapi_domain::error::{LightApiError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// Response of every endpoint that only writes to the vendors.
pub enum WriteResponse {
    NoContent,
}

impl IntoResponse for WriteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Parse a path id. Anything that is not a valid id cannot name a resource,
/// so it is reported as not found rather than as a bad request.
fn parse_id<T: FromStr>(entity: &'static str, raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(LightApiError::from(NotFoundError {
            entity,
            id: raw.to_string(),
        }))
    })
}

/// Build the control API router.
pub fn routes<B, G>() -> Router<AppState<B, G>>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    Router::new()
        // Home
        .route("/home", get(home::status::<B, G>))
        .route("/home/active/toggle", post(home::toggle::<B, G>))
        .route("/home/active/{state}", post(home::set_active::<B, G>))
        // Rooms
        .route("/room", get(rooms::list::<B, G>))
        .route("/room/{id}", get(rooms::get::<B, G>))
        .route("/room/{id}/active/{state}", post(rooms::set_active::<B, G>))
        .route(
            "/room/{id}/brightness/{step}",
            post(rooms::step_brightness::<B, G>),
        )
        .route(
            "/room/{id}/brightness/floor/{level}",
            post(rooms::raise_brightness::<B, G>),
        )
        .route("/room/{id}/scenes", get(rooms::scenes::<B, G>))
        .route("/room/{id}/scene/night", post(rooms::night::<B, G>))
        .route("/room/{id}/scene/bright", post(rooms::bright::<B, G>))
        .route("/room/{id}/scene/next", post(rooms::next_scene::<B, G>))
        // Lamps
        .route("/lamp", get(lamps::list::<B, G>))
        .route("/lamp/{id}", get(lamps::get::<B, G>))
        .route("/lamp/{id}/active/{state}", post(lamps::set_active::<B, G>))
        .route(
            "/lamp/{id}/brightness/{step}",
            post(lamps::step_brightness::<B, G>),
        )
}
