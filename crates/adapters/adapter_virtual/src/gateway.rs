//! In-memory mesh gateway.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use lightapi_app::ports::SocketGateway;
use lightapi_domain::error::LightApiError;
use lightapi_domain::mesh::{MeshDevice, MeshDeviceId};

use crate::error::VirtualError;

/// Mesh gateway with a fixed device list and socket states in a map.
pub struct VirtualGateway {
    devices: Vec<MeshDevice>,
    sockets: Mutex<BTreeMap<MeshDeviceId, bool>>,
    writes: Mutex<Vec<(MeshDeviceId, bool)>>,
    offline: AtomicBool,
}

impl VirtualGateway {
    #[must_use]
    pub fn new(devices: Vec<MeshDevice>) -> Self {
        Self {
            devices,
            sockets: Mutex::new(BTreeMap::new()),
            writes: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }

    /// Last state written to `device`, if any.
    #[must_use]
    pub fn socket(&self, device: MeshDeviceId) -> Option<bool> {
        self.lock_sockets().get(&device).copied()
    }

    /// Every socket write received so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<(MeshDeviceId, bool)> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make every subsequent call fail with a backend error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), LightApiError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(VirtualError::Offline("gateway").into_domain());
        }
        Ok(())
    }

    fn lock_sockets(&self) -> MutexGuard<'_, BTreeMap<MeshDeviceId, bool>> {
        self.sockets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SocketGateway for VirtualGateway {
    async fn devices(&self) -> Result<Vec<MeshDevice>, LightApiError> {
        self.check_online()?;
        Ok(self.devices.clone())
    }

    async fn set_socket_state(&self, device: MeshDeviceId, on: bool) -> Result<(), LightApiError> {
        self.check_online()?;
        tracing::debug!(%device, on, "virtual socket write");
        self.lock_sockets().insert(device, on);
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((device, on));
        Ok(())
    }
}
