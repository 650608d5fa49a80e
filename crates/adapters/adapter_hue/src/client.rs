//! CLIP v2 client implementing [`LightingBridge`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use lightapi_app::ports::LightingBridge;
use lightapi_domain::brightness::Brightness;
use lightapi_domain::error::LightApiError;
use lightapi_domain::home::BridgeInventory;
use lightapi_domain::id::SceneId;
use lightapi_domain::light::{LightState, LightTarget};

use crate::config::HueConfig;
use crate::error::HueError;
use crate::model::{
    Dimming, Envelope, GroupedLightResource, LightResource, LightStateResource, LightUpdate, On,
    RoomResource, SceneRecall, SceneResource,
};

const LIGHT: &str = "light";
const ROOM: &str = "room";
const SCENE: &str = "scene";
const GROUPED_LIGHT: &str = "grouped_light";

/// Hue bridge reached over HTTPS.
pub struct HueBridge {
    http: reqwest::Client,
    base_url: String,
}

impl HueBridge {
    /// Connect to the bridge described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HueError`] if the HTTP client cannot be built.
    pub fn new(config: &HueConfig) -> Result<Self, HueError> {
        let http = config.build_client()?;
        Ok(Self::from_reqwest(&config.base_url(), http))
    }

    /// Use an existing client against `base_url` (scheme and host, no path).
    #[must_use]
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, rtype: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/clip/v2/resource/{rtype}/{id}", self.base_url),
            None => format!("{}/clip/v2/resource/{rtype}", self.base_url),
        }
    }

    fn target_path(target: LightTarget) -> (&'static str, String) {
        match target {
            LightTarget::Lamp(id) => (LIGHT, id.to_string()),
            LightTarget::Group(id) => (GROUPED_LIGHT, id.to_string()),
        }
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get_all<T: DeserializeOwned>(&self, rtype: &str) -> Result<Vec<T>, HueError> {
        let url = self.url(rtype, None);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(HueError::Transport)?;

        Self::parse_envelope(resp).await
    }

    async fn get_one<T: DeserializeOwned>(
        &self,
        rtype: &'static str,
        id: &str,
    ) -> Result<T, HueError> {
        let url = self.url(rtype, Some(id));
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(HueError::Transport)?;

        Self::parse_envelope(resp)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| HueError::Missing {
                rtype,
                id: id.to_string(),
            })
    }

    async fn put(&self, rtype: &str, id: &str, body: &impl Serialize) -> Result<(), HueError> {
        let url = self.url(rtype, Some(id));
        tracing::debug!(%url, "PUT");

        let resp = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(HueError::Transport)?;

        Self::parse_envelope::<serde_json::Value>(resp).await?;
        Ok(())
    }

    /// Check the status, then unwrap the `{errors, data}` envelope.
    async fn parse_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, HueError> {
        let status = resp.status();
        let body = resp.text().await.map_err(HueError::Transport)?;

        if !status.is_success() {
            return Err(HueError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(HueError::Decode)?;
        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .into_iter()
                .map(|err| err.description)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(HueError::Api(message));
        }
        Ok(envelope.data)
    }

    async fn fetch_inventory(&self) -> Result<BridgeInventory, HueError> {
        let lamps = self.get_all::<LightResource>(LIGHT).await?;
        let rooms = self.get_all::<RoomResource>(ROOM).await?;
        let scenes = self.get_all::<SceneResource>(SCENE).await?;
        let groups = self.get_all::<GroupedLightResource>(GROUPED_LIGHT).await?;

        Ok(BridgeInventory {
            lamps: lamps.into_iter().map(Into::into).collect(),
            rooms: rooms.into_iter().map(Into::into).collect(),
            scenes: scenes.into_iter().map(Into::into).collect(),
            groups: groups.into_iter().map(Into::into).collect(),
        })
    }
}

impl LightingBridge for HueBridge {
    async fn inventory(&self) -> Result<BridgeInventory, LightApiError> {
        Ok(self.fetch_inventory().await?)
    }

    async fn light_state(&self, target: LightTarget) -> Result<LightState, LightApiError> {
        let (rtype, id) = Self::target_path(target);
        let resource: LightStateResource = self.get_one(rtype, &id).await?;
        Ok(resource.into())
    }

    async fn set_on(&self, target: LightTarget, on: bool) -> Result<(), LightApiError> {
        let (rtype, id) = Self::target_path(target);
        self.put(rtype, &id, &LightUpdate::On { on: On { on } })
            .await?;
        Ok(())
    }

    async fn set_brightness(
        &self,
        target: LightTarget,
        brightness: Brightness,
    ) -> Result<(), LightApiError> {
        let (rtype, id) = Self::target_path(target);
        let update = LightUpdate::Dimming {
            dimming: Dimming {
                brightness: brightness.value(),
            },
        };
        self.put(rtype, &id, &update).await?;
        Ok(())
    }

    async fn recall_scene(&self, scene: SceneId) -> Result<(), LightApiError> {
        self.put(SCENE, &scene.to_string(), &SceneRecall::active())
            .await?;
        Ok(())
    }
}
