//! Mesh gateway port — individually addressable devices such as sockets.

use std::future::Future;

use lightapi_domain::error::LightApiError;
use lightapi_domain::mesh::{MeshDevice, MeshDeviceId};

/// Access to the mesh lighting gateway.
pub trait SocketGateway {
    /// Fetch every paired device.
    fn devices(&self) -> impl Future<Output = Result<Vec<MeshDevice>, LightApiError>> + Send;

    /// Switch a socket-capable device.
    fn set_socket_state(
        &self,
        device: MeshDeviceId,
        on: bool,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send;
}

impl<T: SocketGateway + Send + Sync> SocketGateway for std::sync::Arc<T> {
    fn devices(&self) -> impl Future<Output = Result<Vec<MeshDevice>, LightApiError>> + Send {
        (**self).devices()
    }

    fn set_socket_state(
        &self,
        device: MeshDeviceId,
        on: bool,
    ) -> impl Future<Output = Result<(), LightApiError>> + Send {
        (**self).set_socket_state(device, on)
    }
}
