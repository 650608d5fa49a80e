//! The broker event loop.

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, Packet, QoS};

use lightapi_app::ports::HomeRelay;
use lightapi_app::services::intercom_service::IntercomService;

use crate::config::MqttConfig;
use crate::error::MqttError;

/// Feeds intercom messages from the broker into an [`IntercomService`].
pub struct IntercomListener<R> {
    client: AsyncClient,
    eventloop: EventLoop,
    service: IntercomService<R>,
    reconnect_delay: Duration,
}

impl<R: HomeRelay + Sync> IntercomListener<R> {
    /// Create the client. Nothing is sent until [`run`](Self::run) polls.
    pub fn new(config: &MqttConfig, service: IntercomService<R>) -> Self {
        let (client, eventloop) = AsyncClient::new(config.options(), config.channel_capacity);
        Self {
            client,
            eventloop,
            service,
            reconnect_delay: config.reconnect_delay(),
        }
    }

    /// Poll the broker forever.
    ///
    /// # Errors
    ///
    /// Returns as soon as a message cannot be handled or the subscription
    /// cannot be queued. Connection errors never end the loop.
    pub async fn run(mut self) -> Result<(), MqttError> {
        tracing::info!(
            subscription = %self.service.topics().subscription(),
            "intercom listener started"
        );
        loop {
            match self.eventloop.poll().await {
                Ok(event) => self.on_event(event).await?,
                Err(err) => {
                    tracing::warn!(%err, delay = ?self.reconnect_delay, "broker connection error");
                    tokio::time::sleep(self.reconnect_delay).await;
                }
            }
        }
    }

    async fn on_event(&self, event: Event) -> Result<(), MqttError> {
        match event {
            Event::Incoming(Packet::ConnAck(ack)) => {
                let filter = self.service.topics().subscription();
                tracing::info!(code = ?ack.code, %filter, "connected, subscribing");
                self.client
                    .subscribe(filter, QoS::AtMostOnce)
                    .await
                    .map_err(MqttError::Client)?;
            }
            Event::Incoming(Packet::Publish(publish)) => {
                let outcome = self
                    .service
                    .handle(&publish.topic, &publish.payload)
                    .await
                    .map_err(MqttError::Domain)?;
                tracing::debug!(topic = %publish.topic, ?outcome, "intercom message handled");
            }
            Event::Incoming(packet) => tracing::trace!(?packet, "incoming"),
            Event::Outgoing(outgoing) => tracing::trace!(?outgoing, "outgoing"),
        }
        Ok(())
    }
}
