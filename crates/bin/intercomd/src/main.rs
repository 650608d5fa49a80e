//! # intercomd — door intercom listener
//!
//! Composition root that wires the MQTT listener to the webhook relay.
//!
//! ## Responsibilities
//! - Parse configuration (`intercom.toml`, `INTERCOM_*` env vars)
//! - Install the `tracing` subscriber
//! - Construct the webhook relay and the intercom service
//! - Run the broker event loop until it fails or SIGINT arrives
//!
//! A card event that cannot be decoded ends the listener with an error, so
//! the process exits non-zero and the supervisor restarts it.
//!
//! ## Dependency rule
//! Wiring only; no domain logic belongs here.

mod config;

use lightapi_adapter_mqtt::IntercomListener;
use lightapi_adapter_webhook::WebhookRelay;
use lightapi_app::services::intercom_service::IntercomService;
use lightapi_domain::intercom::CardAllowList;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let allowed: CardAllowList = config.intercom.allowed_cards.iter().cloned().collect();
    if allowed.is_empty() {
        tracing::warn!("no allowed cards configured, card scans will never toggle the home");
    }

    let relay = WebhookRelay::new(&config.webhook)?;
    tracing::info!(
        toggle = %config.webhook.toggle_url(),
        doorbell = %config.webhook.doorbell_url(),
        relay_doorbell = config.intercom.relay_doorbell,
        cards = allowed.len(),
        "relay configured"
    );

    let service = IntercomService::new(
        relay,
        config.intercom.topics(),
        allowed,
        config.intercom.relay_doorbell,
    );
    let listener = IntercomListener::new(&config.mqtt, service);

    tokio::select! {
        result = listener.run() => result?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("intercomd stopped");
        }
    }

    Ok(())
}
