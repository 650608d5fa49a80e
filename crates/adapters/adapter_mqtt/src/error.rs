//! MQTT adapter error types.

use lightapi_domain::error::LightApiError;

/// Errors that stop the intercom listener.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client returned an error.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// The intercom service rejected a message or the relay failed.
    #[error("intercom event handling failed")]
    Domain(#[source] LightApiError),
}

impl MqttError {
    /// Convert into a [`LightApiError`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> LightApiError {
        match self {
            Self::Domain(err) => err,
            other => LightApiError::Backend(Box::new(other)),
        }
    }
}

impl From<MqttError> for LightApiError {
    fn from(err: MqttError) -> Self {
        err.into_domain()
    }
}
