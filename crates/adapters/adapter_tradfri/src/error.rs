//! TRÅDFRI adapter error types.

use lightapi_domain::error::LightApiError;

/// Errors specific to the TRÅDFRI gateway adapter.
#[derive(Debug, thiserror::Error)]
pub enum TradfriError {
    /// A CoAP packet could not be encoded or decoded.
    #[error("invalid CoAP packet: {0}")]
    Packet(String),

    /// The UDP socket failed.
    #[error("gateway socket error")]
    Io(#[source] std::io::Error),

    /// The DTLS handshake or record layer failed.
    #[error("DTLS error")]
    Dtls(#[source] webrtc_dtls::Error),

    /// No response arrived in time.
    #[error("gateway did not answer within {0} s")]
    Timeout(u64),

    /// The gateway answered with a non-success response code.
    #[error("gateway answered {0}")]
    Status(String),

    /// The response payload is not the expected JSON.
    #[error("failed to decode gateway payload")]
    Decode(#[source] serde_json::Error),
}

impl TradfriError {
    /// Convert into a [`LightApiError::Backend`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> LightApiError {
        LightApiError::Backend(Box::new(self))
    }
}

impl From<TradfriError> for LightApiError {
    fn from(err: TradfriError) -> Self {
        err.into_domain()
    }
}
