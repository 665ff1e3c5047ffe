//! Host-side responder answering status requests from the platform controller.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

use crate::detector::ProcessDetector;
use crate::error::{LivenessError, LivenessResult};
use crate::protocol::{MAX_DATAGRAM, StatusReply, is_status_request};

/// UDP responder that answers `status` with the detector's verdict.
///
/// Detectors run on tokio's blocking pool; a full process-table scan never
/// stalls the runtime thread.
pub struct LivenessResponder<P> {
    socket: UdpSocket,
    detector: Arc<Mutex<P>>,
}

impl<P: ProcessDetector + 'static> LivenessResponder<P> {
    /// Bind the responder socket.
    ///
    /// # Errors
    ///
    /// Returns [`LivenessError::Bind`] if the address cannot be bound.
    pub async fn bind(addr: SocketAddr, detector: P) -> LivenessResult<Self> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| LivenessError::Bind { addr, source })?;
        info!(addr = %addr, "liveness responder bound");
        Ok(Self {
            socket,
            detector: Arc::new(Mutex::new(detector)),
        })
    }

    /// Address actually bound, useful when binding port 0.
    ///
    /// # Errors
    ///
    /// Returns the socket's I/O error.
    pub fn local_addr(&self) -> LivenessResult<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Answer requests until `shutdown` completes. Returns the number of
    /// replies sent.
    ///
    /// Receive and send failures are logged and do not stop the loop.
    pub async fn serve_until<F>(self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        let mut buf = [0u8; MAX_DATAGRAM];
        let mut replies = 0u64;
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!(replies, "liveness responder stopping");
                    return replies;
                }
                received = self.socket.recv_from(&mut buf) => {
                    let (len, peer) = match received {
                        Ok(received) => received,
                        Err(e) => {
                            warn!(error = %e, "liveness receive failed");
                            continue;
                        }
                    };
                    let payload = buf.get(..len).unwrap_or_default();
                    if !is_status_request(payload) {
                        debug!(peer = %peer, len, "ignoring unrelated datagram");
                        continue;
                    }

                    let reply = StatusReply::from_running(self.detect_running().await);
                    match self.socket.send_to(reply.as_str().as_bytes(), peer).await {
                        Ok(_sent) => {
                            replies = replies.saturating_add(1);
                            debug!(peer = %peer, reply = %reply, "status answered");
                        }
                        Err(e) => warn!(peer = %peer, error = %e, "liveness reply failed"),
                    }
                }
            }
        }
    }

    async fn detect_running(&self) -> bool {
        let detector = Arc::clone(&self.detector);
        let scan = tokio::task::spawn_blocking(move || {
            detector
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_running()
        });
        match scan.await {
            Ok(running) => running,
            Err(e) => {
                warn!(error = %e, "process detection failed; reporting not running");
                false
            }
        }
    }
}

impl<P> std::fmt::Debug for LivenessResponder<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivenessResponder")
            .field("local_addr", &self.socket.local_addr().ok())
            .finish_non_exhaustive()
    }
}
