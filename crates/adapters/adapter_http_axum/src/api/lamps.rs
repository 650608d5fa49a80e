//! JSON REST handlers for single lamps.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use lightapi_app::ports::{LightingBridge, SocketGateway};
use lightapi_domain::id::LampId;
use lightapi_domain::lamp::{LampListing, LampSummary};
use lightapi_domain::power::PowerState;

use super::{WriteResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

fn lamp_id(raw: &str) -> Result<LampId, ApiError> {
    parse_id("Lamp", raw)
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<LampListing>>),
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
    Ok(Json<LampSummary>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /lamp`
pub async fn list<B, G>(State(state): State<AppState<B, G>>) -> ListResponse
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.home_service.lamps()))
}

/// `GET /lamp/:id`
pub async fn get<B, G>(
    State(state): State<AppState<B, G>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let summary = state.home_service.lamp_summary(lamp_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(summary)))
}

/// `POST /lamp/:id/active/:state`
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
        .set_lamp_active(lamp_id(&id)?, power)
        .await?;
    Ok(WriteResponse::NoContent)
}

/// `POST /lamp/:id/brightness/:step`
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
        .step_lamp_brightness(lamp_id(&id)?, step)
        .await?;
    Ok(WriteResponse::NoContent)
}
