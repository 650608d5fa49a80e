//! Intercom service — dispatches intercom events to the relay.

use lightapi_domain::error::LightApiError;
use lightapi_domain::intercom::{
    CardAllowList, CardNumber, DoorCardEvent, IntercomMessage, IntercomTopics,
};

use crate::ports::HomeRelay;

/// What happened to one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntercomOutcome {
    /// An allowed card was scanned and the home was toggled.
    HomeToggled(CardNumber),
    /// A card not on the allow-list was scanned.
    CardRejected(CardNumber),
    /// The doorbell was forwarded.
    DoorbellRelayed,
    /// Topic not handled, or doorbell relaying is disabled.
    Ignored,
}

/// Stateless dispatcher from intercom topics to [`HomeRelay`] calls.
pub struct IntercomService<R> {
    relay: R,
    topics: IntercomTopics,
    allowed: CardAllowList,
    relay_doorbell: bool,
}

impl<R: HomeRelay + Sync> IntercomService<R> {
    pub fn new(
        relay: R,
        topics: IntercomTopics,
        allowed: CardAllowList,
        relay_doorbell: bool,
    ) -> Self {
        Self {
            relay,
            topics,
            allowed,
            relay_doorbell,
        }
    }

    #[must_use]
    pub fn topics(&self) -> &IntercomTopics {
        &self.topics
    }

    /// Handle one message.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::Validation`] for a card event whose payload
    /// cannot be decoded, and propagates relay failures.
    pub async fn handle(
        &self,
        topic: &str,
        payload: &[u8],
    ) -> Result<IntercomOutcome, LightApiError> {
        match self.topics.classify(topic) {
            IntercomMessage::DoorCard => {
                let event = DoorCardEvent::parse(payload)?;
                let card = event.card().clone();
                if self.allowed.contains(&card) {
                    tracing::info!(card = %card, "allowed card scanned, toggling home");
                    self.relay.toggle_home().await?;
                    Ok(IntercomOutcome::HomeToggled(card))
                } else {
                    tracing::info!(card = %card, "card not allowed");
                    Ok(IntercomOutcome::CardRejected(card))
                }
            }
            IntercomMessage::Doorbell if self.relay_doorbell => {
                tracing::info!("doorbell pressed, relaying");
                self.relay.ring_doorbell().await?;
                Ok(IntercomOutcome::DoorbellRelayed)
            }
            IntercomMessage::Doorbell => {
                tracing::debug!("doorbell pressed, relaying disabled");
                Ok(IntercomOutcome::Ignored)
            }
            IntercomMessage::Other => {
                tracing::trace!(topic, "unhandled topic");
                Ok(IntercomOutcome::Ignored)
            }
        }
    }
}
