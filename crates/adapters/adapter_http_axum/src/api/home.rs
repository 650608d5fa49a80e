//! JSON REST handlers for the whole home.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use lightapi_app::ports::{LightingBridge, SocketGateway};
use lightapi_domain::home::HomeStatus;
use lightapi_domain::power::PowerState;

use super::WriteResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the status and toggle endpoints.
pub enum StatusResponse {
    Ok(Json<HomeStatus>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /home`
pub async fn status<B, G>(
    State(state): State<AppState<B, G>>,
) -> Result<StatusResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let status = state.home_service.status().await?;
    Ok(StatusResponse::Ok(Json(status)))
}

/// `POST /home/active/toggle`
pub async fn toggle<B, G>(
    State(state): State<AppState<B, G>>,
) -> Result<StatusResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let status = state.home_service.toggle().await?;
    Ok(StatusResponse::Ok(Json(status)))
}

/// `POST /home/active/:state`
pub async fn set_active<B, G>(
    State(state): State<AppState<B, G>>,
    Path(power): Path<PowerState>,
) -> Result<WriteResponse, ApiError>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    state.home_service.set_active(power).await?;
    Ok(WriteResponse::NoContent)
}
