//! JSON REST handlers for rooms and their scenes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use lightapi_app::ports::{LightingBridge, SocketGateway};
use lightapi_domain::brightness::Brightness;
use lightapi_domain::id::RoomId;
use lightapi_domain::power::PowerState;
use lightapi_domain::room::{RoomListing, RoomSummary};
use lightapi_domain::scene::{BRIGHT, NIGHTLIGHT, SceneListing};

use super::{WriteResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

fn room_id(raw: &str) -> Result<RoomId, ApiError> {
    parse_id("Room", raw)
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RoomListing>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RoomSummary>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the scene list endpoint.
pub enum ScenesResponse {
    Ok(Json<Vec<SceneListing>>),
}

impl IntoResponse for ScenesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the next-scene endpoint.
pub enum NextSceneResponse {
    Activated(Json<SceneListing>),
    NoScenes,
}

impl IntoResponse for NextSceneResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Activated(json) => json.into_response(),
            Self::NoScenes => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /room`
pub async fn list<B, G>(State(state): State<AppState<B, G>>) -> ListResponse
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.home_service.rooms()))
}

/// `GET /room/:id`
pub async fn get<B, G>(
    State(state): State<AppState<B, G>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let summary = state.home_service.room_summary(room_id(&id)?)?;
    Ok(GetResponse::Ok(Json(summary)))
}

/// `POST /room/:id/active/:state`
pub async fn set_active<B, G>(
    State(state): State<AppState<B, G>>,
    Path((id, power)): Path<(String, PowerState)>,
) -> Result<WriteResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    state
        .home_service
        .set_room_active(room_id(&id)?, power)
        .await?;
    Ok(WriteResponse::NoContent)
}

/// `POST /room/:id/brightness/:step`
pub async fn step_brightness<B, G>(
    State(state): State<AppState<B, G>>,
    Path((id, step)): Path<(String, i32)>,
) -> Result<WriteResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    state
        .home_service
        .step_room_brightness(room_id(&id)?, step)
        .await?;
    Ok(WriteResponse::NoContent)
}

/// `POST /room/:id/brightness/floor/:level`
pub async fn raise_brightness<B, G>(
    State(state): State<AppState<B, G>>,
    Path((id, level)): Path<(String, f64)>,
) -> Result<WriteResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    state
        .home_service
        .raise_room_brightness(room_id(&id)?, Brightness::new(level))
        .await?;
    Ok(WriteResponse::NoContent)
}

/// `GET /room/:id/scenes`
pub async fn scenes<B, G>(
    State(state): State<AppState<B, G>>,
    Path(id): Path<String>,
) -> Result<ScenesResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let scenes = state.home_service.room_scenes(room_id(&id)?)?;
    Ok(ScenesResponse::Ok(Json(scenes)))
}

/// `POST /room/:id/scene/night`
pub async fn night<B, G>(
    State(state): State<AppState<B, G>>,
    Path(id): Path<String>,
) -> Result<WriteResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    state
        .home_service
        .activate_named_scene(room_id(&id)?, NIGHTLIGHT)
        .await?;
    Ok(WriteResponse::NoContent)
}

/// `POST /room/:id/scene/bright`
pub async fn bright<B, G>(
    State(state): State<AppState<B, G>>,
    Path(id): Path<String>,
) -> Result<WriteResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    state
        .home_service
        .activate_named_scene(room_id(&id)?, BRIGHT)
        .await?;
    Ok(WriteResponse::NoContent)
}

/// `POST /room/:id/scene/next`
pub async fn next_scene<B, G>(
    State(state): State<AppState<B, G>>,
    Path(id): Path<String>,
) -> Result<NextSceneResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let scene = state.home_service.next_scene(room_id(&id)?).await?;
    Ok(scene.map_or(NextSceneResponse::NoScenes, |scene| {
        NextSceneResponse::Activated(Json(scene))
    }))
}
