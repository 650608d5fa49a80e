//! Hue adapter error types.

use lightapi_domain::error::LightApiError;

/// Errors specific to the Hue bridge adapter.
#[derive(Debug, thiserror::Error)]
pub enum HueError {
    /// The application key cannot be sent as a header.
    #[error("application key is not a valid header value")]
    InvalidKey,

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read.
    #[error("request to bridge failed")]
    Transport(#[source] reqwest::Error),

    /// The bridge answered with a non-success status.
    #[error("bridge returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The bridge reported errors in the response envelope.
    #[error("bridge error: {0}")]
    Api(String),

    /// The response body is not the expected JSON.
    #[error("failed to decode bridge response")]
    Decode(#[source] serde_json::Error),

    /// A single-resource read returned no data.
    #[error("bridge has no {rtype} {id}")]
    Missing { rtype: &'static str, id: String },
}

impl HueError {
    /// Convert into a [`LightApiError::Backend`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> LightApiError {
        LightApiError::Backend(Box::new(self))
    }
}

impl From<HueError> for LightApiError {
    fn from(err: HueError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = HueError::Status {
            status: 403,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "bridge returned HTTP 403");
    }

    #[test]
    fn should_convert_to_backend_error() {
        let err: LightApiError = HueError::Api("resource not found".to_string()).into();
        assert!(matches!(err, LightApiError::Backend(_)));
    }
}
