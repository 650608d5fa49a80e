//! # lightapid — home lighting control daemon
//!
//! Composition root that wires the lighting backends to the HTTP adapter and
//! starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`lightapi.toml`, `LIGHTAPI_*` env vars)
//! - Install the `tracing` subscriber
//! - Construct the selected backend: Hue bridge plus TRÅDFRI gateway, or the
//!   in-memory demo home
//! - Read the bridge inventory once and build the home graph
//! - Build the axum router and serve until SIGINT
//!
//! ## Dependency rule
//! This is the only crate that depends on the HTTP adapter and the lighting
//! backends at once. It is the wiring layer: no domain logic belongs here.

mod config;

use lightapi_adapter_http_axum::state::AppState;
use lightapi_adapter_hue::HueBridge;
use lightapi_adapter_tradfri::TradfriGateway;
use lightapi_app::ports::{LightingBridge, SocketGateway};
use lightapi_app::services::home_service::HomeService;
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    match config.backend {
        Backend::Hue => {
            tracing::info!(
                bridge = %config.hue.host,
                gateway = %config.tradfri.address(),
                "using hue backend"
            );
            let bridge = HueBridge::new(&config.hue)?;
            let gateway = TradfriGateway::connect(&config.tradfri);
            serve(&config, bridge, gateway).await
        }
        Backend::Virtual => {
            tracing::info!("using virtual backend");
            let (bridge, gateway) = lightapi_adapter_virtual::demo();
            serve(&config, bridge, gateway).await
        }
    }
}

async fn serve<B, G>(
    config: &Config,
    bridge: B,
    gateway: G,
) -> Result<(), Box<dyn std::error::Error>>
where
    B: LightingBridge + Send + Sync + 'static,
    G: SocketGateway + Send + Sync + 'static,
{
    let service = HomeService::connect(bridge, gateway, config.home.wake_rooms.clone()).await?;
    let app = lightapi_adapter_http_axum::router::build(AppState::new(service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "lightapid listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("lightapid stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
