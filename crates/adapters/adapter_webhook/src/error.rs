//! Webhook adapter error types.

use lightapi_domain::error::LightApiError;

/// Errors specific to the webhook relay.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be delivered.
    #[error("POST {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl WebhookError {
    /// Convert into a [`LightApiError::Backend`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> LightApiError {
        LightApiError::Backend(Box::new(self))
    }
}

impl From<WebhookError> for LightApiError {
    fn from(err: WebhookError) -> Self {
        err.into_domain()
    }
}
