//! Socket gateway port over a [`CoapTransport`].

use std::sync::atomic::{AtomicU16, Ordering};

use coap_lite::{Packet, RequestType};
use serde::de::DeserializeOwned;

use lightapi_app::ports::SocketGateway;
use lightapi_domain::error::LightApiError;
use lightapi_domain::mesh::{MeshDevice, MeshDeviceId};

use crate::coap;
use crate::config::TradfriConfig;
use crate::error::TradfriError;
use crate::model::{DeviceResource, SocketCommand};
use crate::transport::{CoapTransport, DtlsTransport};

/// TRÅDFRI gateway.
pub struct TradfriGateway<T> {
    transport: T,
    next_message_id: AtomicU16,
}

impl TradfriGateway<DtlsTransport> {
    /// Gateway reached over DTLS as described by `config`.
    #[must_use]
    pub fn connect(config: &TradfriConfig) -> Self {
        Self::new(DtlsTransport::new(config))
    }
}

impl<T: CoapTransport + Sync> TradfriGateway<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_message_id: AtomicU16::new(1),
        }
    }

    fn message_id(&self) -> u16 {
        self.next_message_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send(
        &self,
        method: RequestType,
        path: &str,
        payload: Option<Vec<u8>>,
    ) -> Result<Packet, TradfriError> {
        let request = coap::request(method, path, payload, self.message_id());
        tracing::debug!(?method, path, message_id = request.header.message_id, "CoAP request");
        self.transport.exchange(&request).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, TradfriError> {
        let response = self.send(RequestType::Get, path, None).await?;
        serde_json::from_slice(coap::success_payload(&response)?).map_err(TradfriError::Decode)
    }

    async fn fetch_devices(&self) -> Result<Vec<MeshDevice>, TradfriError> {
        let ids: Vec<u32> = self.get(coap::DEVICES).await?;
        let mut devices = Vec::with_capacity(ids.len());
        for id in ids {
            let device: DeviceResource = self.get(&format!("{}/{id}", coap::DEVICES)).await?;
            devices.push(MeshDevice::from(device));
        }
        tracing::debug!(count = devices.len(), "gateway devices read");
        Ok(devices)
    }

    async fn write_socket(&self, device: MeshDeviceId, on: bool) -> Result<(), TradfriError> {
        let body = serde_json::to_vec(&SocketCommand::new(on)).map_err(TradfriError::Decode)?;
        let response = self
            .send(
                RequestType::Put,
                &format!("{}/{device}", coap::DEVICES),
                Some(body),
            )
            .await?;
        coap::success_payload(&response)?;
        Ok(())
    }
}

impl<T: CoapTransport + Sync> SocketGateway for TradfriGateway<T> {
    async fn devices(&self) -> Result<Vec<MeshDevice>, LightApiError> {
        Ok(self.fetch_devices().await?)
    }

    async fn set_socket_state(&self, device: MeshDeviceId, on: bool) -> Result<(), LightApiError> {
        self.write_socket(device, on).await?;
        tracing::info!(%device, on, "socket switched");
        Ok(())
    }
}
