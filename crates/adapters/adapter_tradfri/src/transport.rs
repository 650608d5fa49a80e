//! The seam between the gateway logic and the network.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use coap_lite::Packet;
use tokio::net::UdpSocket;
use webrtc_dtls::cipher_suite::CipherSuiteId;
use webrtc_dtls::config::Config;
use webrtc_dtls::conn::DTLSConn;
use webrtc_util::conn::Conn;

use crate::coap::{self, Reply};
use crate::config::TradfriConfig;
use crate::error::TradfriError;

/// Largest datagram the gateway sends.
const MAX_DATAGRAM: usize = 1152;

/// Carries one CoAP exchange to the gateway.
pub trait CoapTransport {
    /// Send `request` and return the response matching it.
    fn exchange(
        &self,
        request: &Packet,
    ) -> impl Future<Output = Result<Packet, TradfriError>> + Send;
}

impl<T: CoapTransport + Send + Sync> CoapTransport for Arc<T> {
    fn exchange(
        &self,
        request: &Packet,
    ) -> impl Future<Output = Result<Packet, TradfriError>> + Send {
        (**self).exchange(request)
    }
}

/// CoAP over DTLS-PSK, one DTLS session per exchange.
pub struct DtlsTransport {
    address: String,
    identity: Vec<u8>,
    psk: Vec<u8>,
    timeout: Duration,
}

impl DtlsTransport {
    #[must_use]
    pub fn new(config: &TradfriConfig) -> Self {
        Self {
            address: config.address(),
            identity: config.identity.as_bytes().to_vec(),
            psk: config.psk.as_bytes().to_vec(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn dtls_config(&self) -> Config {
        let psk = self.psk.clone();
        Config {
            psk: Some(Arc::new(move |_hint: &[u8]| {
                Ok::<_, webrtc_dtls::Error>(psk.clone())
            })),
            psk_identity_hint: Some(self.identity.clone()),
            cipher_suites: vec![CipherSuiteId::Tls_Psk_With_Aes_128_Ccm_8],
            ..Config::default()
        }
    }

    async fn connect(&self) -> Result<DTLSConn, TradfriError> {
        let socket = UdpSocket::bind("0.0.0.0:0").await.map_err(TradfriError::Io)?;
        socket
            .connect(&self.address)
            .await
            .map_err(TradfriError::Io)?;
        let socket: Arc<dyn Conn + Send + Sync> = Arc::new(socket);

        DTLSConn::new(socket, self.dtls_config(), true, None)
            .await
            .map_err(TradfriError::Dtls)
    }

    async fn round_trip(&self, conn: &DTLSConn, request: &Packet) -> Result<Packet, TradfriError> {
        conn.write(&coap::encode(request)?, None)
            .await
            .map_err(TradfriError::Dtls)?;

        let mut buf = vec![0u8; MAX_DATAGRAM];
        loop {
            let len = conn.read(&mut buf, None).await.map_err(TradfriError::Dtls)?;
            let incoming = coap::decode(&buf[..len])?;
            match coap::classify(request, &incoming) {
                Reply::Response => {
                    if coap::needs_ack(&incoming) {
                        let ack = coap::empty_ack(incoming.header.message_id);
                        conn.write(&coap::encode(&ack)?, None)
                            .await
                            .map_err(TradfriError::Dtls)?;
                    }
                    return Ok(incoming);
                }
                Reply::EmptyAck => {
                    tracing::trace!("request acknowledged, awaiting separate response");
                }
                Reply::Unrelated => {
                    tracing::debug!(
                        message_id = incoming.header.message_id,
                        "ignoring unrelated CoAP message"
                    );
                }
            }
        }
    }
}

impl CoapTransport for DtlsTransport {
    async fn exchange(&self, request: &Packet) -> Result<Packet, TradfriError> {
        let timeout_secs = self.timeout.as_secs();

        let conn = tokio::time::timeout(self.timeout, self.connect())
            .await
            .map_err(|_| TradfriError::Timeout(timeout_secs))??;

        let result = tokio::time::timeout(self.timeout, self.round_trip(&conn, request))
            .await
            .map_err(|_| TradfriError::Timeout(timeout_secs));

        if let Err(err) = conn.close().await {
            tracing::debug!(error = %err, "closing DTLS session failed");
        }

        result?
    }
}
