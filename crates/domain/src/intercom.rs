//! Door intercom events.
//!
//! The intercom publishes JSON events under a topic prefix. Only two topics
//! matter here: card scans and doorbell presses.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ValidationError;

/// Topic prefix the intercom publishes under.
pub const DEFAULT_TOPIC_PREFIX: &str = "DahuaVTO";

/// Topics derived from a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntercomTopics {
    prefix: String,
    doorbell: String,
}

impl IntercomTopics {
    /// Topics under `prefix`, with the doorbell on `{prefix}/Invite/Event`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let doorbell = format!("{prefix}/Invite/Event");
        Self { prefix, doorbell }
    }

    /// Override the doorbell topic.
    #[must_use]
    pub fn with_doorbell(mut self, topic: impl Into<String>) -> Self {
        self.doorbell = topic.into();
        self
    }

    /// Wildcard filter covering every intercom topic.
    #[must_use]
    pub fn subscription(&self) -> String {
        format!("{}/#", self.prefix)
    }

    /// Topic carrying card-scan events.
    #[must_use]
    pub fn door_card(&self) -> String {
        format!("{}/DoorCard/Event", self.prefix)
    }

    #[must_use]
    pub fn doorbell(&self) -> &str {
        &self.doorbell
    }

    /// Which kind of message arrived on `topic`.
    #[must_use]
    pub fn classify(&self, topic: &str) -> IntercomMessage {
        if topic == self.door_card() {
            IntercomMessage::DoorCard
        } else if topic == self.doorbell {
            IntercomMessage::Doorbell
        } else {
            IntercomMessage::Other
        }
    }
}

impl Default for IntercomTopics {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC_PREFIX)
    }
}

/// Kind of an incoming intercom message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntercomMessage {
    DoorCard,
    Doorbell,
    Other,
}

/// Identifier printed on an access card.
///
/// The intercom sends it either as a JSON string or a JSON number; both are
/// normalised to their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Number(number) => Self(number.to_string()),
        })
    }
}

/// A card was presented at the door.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DoorCardEvent {
    #[serde(rename = "Data")]
    data: DoorCardData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct DoorCardData {
    #[serde(rename = "Number")]
    number: CardNumber,
}

impl DoorCardEvent {
    /// Decode a raw event payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedEvent`] when the payload is not
    /// JSON or has no `Data.Number` field.
    pub fn parse(payload: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(payload).map_err(ValidationError::MalformedEvent)
    }

    #[must_use]
    pub fn card(&self) -> &CardNumber {
        &self.data.number
    }
}

/// Cards allowed to toggle the home.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAllowList(HashSet<CardNumber>);

impl CardAllowList {
    #[must_use]
    pub fn contains(&self, card: &CardNumber) -> bool {
        self.0.contains(card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CardAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(CardNumber::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_card_number_given_as_string() {
        let event = DoorCardEvent::parse(br#"{"Action":"Pulse","Data":{"Number":"12345"}}"#).unwrap();
        assert_eq!(event.card().as_str(), "12345");
    }

    #[test]
    fn should_normalise_card_number_given_as_integer() {
        let event = DoorCardEvent::parse(br#"{"Data":{"Number":12345,"UTC":1726573947}}"#).unwrap();
        assert_eq!(event.card(), &CardNumber::new("12345"));
    }

    #[test]
    fn should_reject_payload_without_number() {
        let result = DoorCardEvent::parse(br#"{"Data":{"UserID":"9901"}}"#);
        assert!(matches!(result, Err(ValidationError::MalformedEvent(_))));
    }

    #[test]
    fn should_reject_non_json_payload() {
        assert!(DoorCardEvent::parse(b"ring").is_err());
    }

    #[test]
    fn should_match_allow_list_members_only() {
        let allowed: CardAllowList = ["12345", "777"].into_iter().collect();
        assert!(allowed.contains(&CardNumber::new("777")));
        assert!(!allowed.contains(&CardNumber::new("778")));
        assert_eq!(allowed.len(), 2);
    }

    #[test]
    fn should_classify_topics_under_prefix() {
        let topics = IntercomTopics::default();
        assert_eq!(topics.subscription(), "DahuaVTO/#");
        assert_eq!(
            topics.classify("DahuaVTO/DoorCard/Event"),
            IntercomMessage::DoorCard
        );
        assert_eq!(
            topics.classify("DahuaVTO/Invite/Event"),
            IntercomMessage::Doorbell
        );
        assert_eq!(
            topics.classify("DahuaVTO/DoorCard/Event/extra"),
            IntercomMessage::Other
        );
    }

    #[test]
    fn should_use_custom_doorbell_topic() {
        let topics = IntercomTopics::new("vto").with_doorbell("vto/Call");
        assert_eq!(topics.classify("vto/Call"), IntercomMessage::Doorbell);
        assert_eq!(topics.door_card(), "vto/DoorCard/Event");
    }
}
