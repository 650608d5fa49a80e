//! [`HomeRelay`] over plain HTTP POSTs.

use std::time::Duration;

use lightapi_app::ports::HomeRelay;
use lightapi_domain::error::LightApiError;

use crate::config::WebhookConfig;
use crate::error::WebhookError;

/// Posts to the home control service and the home-automation controller.
pub struct WebhookRelay {
    http: reqwest::Client,
    toggle_url: String,
    doorbell_url: String,
}

impl WebhookRelay {
    /// Build a relay for the URLs in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(WebhookError::Client)?;
        Ok(Self::from_reqwest(
            http,
            config.toggle_url(),
            config.doorbell_url(),
        ))
    }

    /// Use an existing client with explicit URLs.
    #[must_use]
    pub fn from_reqwest(http: reqwest::Client, toggle_url: String, doorbell_url: String) -> Self {
        Self {
            http,
            toggle_url,
            doorbell_url,
        }
    }

    async fn post(&self, url: &str) -> Result<(), WebhookError> {
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|source| WebhookError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if status.is_success() {
            tracing::info!(%url, %status, "webhook delivered");
        } else {
            tracing::warn!(%url, %status, "webhook answered with non-success status");
        }
        Ok(())
    }
}

impl HomeRelay for WebhookRelay {
    async fn toggle_home(&self) -> Result<(), LightApiError> {
        Ok(self.post(&self.toggle_url).await?)
    }

    async fn ring_doorbell(&self) -> Result<(), LightApiError> {
        Ok(self.post(&self.doorbell_url).await?)
    }
}
