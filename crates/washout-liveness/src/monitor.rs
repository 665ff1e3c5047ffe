//! Platform-side heartbeat monitor.
//!
//! The monitor polls a [`LivenessResponder`](crate::LivenessResponder) and
//! reports two facts: whether the host answered recently (`heartbeat_ok`) and
//! whether the host says the simulator is up (`app_running`). Washout ticks
//! only while both hold.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use serde::Serialize;
use tokio::net::UdpSocket;
use tokio::time::{Instant, timeout};
use tracing::{debug, info, warn};

use crate::error::{LivenessError, LivenessResult};
use crate::protocol::{MAX_DATAGRAM, STATUS_REQUEST, StatusReply};

/// Timing of the heartbeat poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatConfig {
    /// How long one query waits for its reply
    pub reply_timeout: Duration,
    /// How long a reply keeps the heartbeat alive
    pub heartbeat_timeout: Duration,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            reply_timeout: Duration::from_millis(200),
            heartbeat_timeout: Duration::from_secs(2),
        }
    }
}

/// Result of a heartbeat query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LivenessStatus {
    /// A reply arrived within the heartbeat timeout
    pub heartbeat_ok: bool,
    /// The last reply reported the application running
    pub app_running: bool,
}

impl LivenessStatus {
    /// Whether the washout engine may tick.
    #[must_use]
    pub const fn should_tick(&self) -> bool {
        self.heartbeat_ok && self.app_running
    }
}

/// Polls a remote responder.
#[derive(Debug)]
pub struct HeartbeatMonitor {
    socket: UdpSocket,
    target: SocketAddr,
    config: HeartbeatConfig,
    last_reply: Option<Instant>,
    app_running: bool,
}

impl HeartbeatMonitor {
    /// Bind an ephemeral socket connected to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`LivenessError::Bind`] or the I/O error from connecting.
    pub async fn connect(target: SocketAddr, config: HeartbeatConfig) -> LivenessResult<Self> {
        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|source| LivenessError::Bind {
                addr: local,
                source,
            })?;
        socket.connect(target).await?;
        info!(target = %target, "heartbeat monitor connected");

        Ok(Self {
            socket,
            target,
            config,
            last_reply: None,
            app_running: false,
        })
    }

    /// Responder being polled.
    #[must_use]
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// Heartbeat timing.
    #[must_use]
    pub fn config(&self) -> HeartbeatConfig {
        self.config
    }

    /// Send one status request, wait up to the reply timeout, and report.
    pub async fn query_status(&mut self) -> LivenessStatus {
        if let Err(e) = self.socket.send(STATUS_REQUEST.as_bytes()).await {
            warn!(target = %self.target, error = %e, "status request failed");
            return self.status_at(Instant::now());
        }

        let mut buf = [0u8; MAX_DATAGRAM];
        match timeout(self.config.reply_timeout, self.socket.recv(&mut buf)).await {
            Ok(Ok(len)) => {
                let text = String::from_utf8_lossy(buf.get(..len).unwrap_or_default());
                match text.parse::<StatusReply>() {
                    Ok(reply) => self.record_reply(reply, Instant::now()),
                    Err(e) => warn!(target = %self.target, error = %e, "ignoring reply"),
                }
            }
            Ok(Err(e)) => {
                debug!(target = %self.target, error = %e, "status receive failed");
            }
            Err(_elapsed) => {
                debug!(target = %self.target, "status reply timed out");
            }
        }

        self.status_at(Instant::now())
    }

    /// Record a reply received at `at`.
    pub fn record_reply(&mut self, reply: StatusReply, at: Instant) {
        self.last_reply = Some(at);
        self.app_running = reply.is_running();
    }

    /// Status as of `now`. A stale heartbeat also clears `app_running`.
    #[must_use]
    pub fn status_at(&self, now: Instant) -> LivenessStatus {
        let heartbeat_ok = self.last_reply.is_some_and(|at| {
            now.saturating_duration_since(at) <= self.config.heartbeat_timeout
        });
        LivenessStatus {
            heartbeat_ok,
            app_running: heartbeat_ok && self.app_running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Bound but silent peer, so no ICMP unreachable comes back
    async fn idle_monitor(
        config: HeartbeatConfig,
    ) -> LivenessResult<(UdpSocket, HeartbeatMonitor)> {
        let silent = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let target = silent.local_addr()?;
        let monitor = HeartbeatMonitor::connect(target, config).await?;
        Ok((silent, monitor))
    }

    #[test]
    fn test_should_tick_requires_both() {
        let cases = [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (true, true, true),
        ];
        for (heartbeat_ok, app_running, expected) in cases {
            let status = LivenessStatus {
                heartbeat_ok,
                app_running,
            };
            assert_eq!(status.should_tick(), expected);
        }
    }

    #[tokio::test]
    async fn test_heartbeat_expires_after_timeout() -> Result<(), LivenessError> {
        let config = HeartbeatConfig {
            reply_timeout: Duration::from_millis(10),
            heartbeat_timeout: Duration::from_secs(1),
        };
        let (_silent, mut monitor) = idle_monitor(config).await?;
        let start = Instant::now();

        assert_eq!(monitor.status_at(start), LivenessStatus::default());

        monitor.record_reply(StatusReply::Running, start);
        let fresh = monitor.status_at(start + Duration::from_millis(999));
        assert!(fresh.should_tick());

        let edge = monitor.status_at(start + Duration::from_secs(1));
        assert!(edge.heartbeat_ok);

        let stale = monitor.status_at(start + Duration::from_millis(1001));
        assert_eq!(stale, LivenessStatus::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_not_running_reply_keeps_heartbeat() -> Result<(), LivenessError> {
        let (_silent, mut monitor) = idle_monitor(HeartbeatConfig::default()).await?;
        let now = Instant::now();
        monitor.record_reply(StatusReply::NotRunning, now);

        let status = monitor.status_at(now);
        assert!(status.heartbeat_ok);
        assert!(!status.app_running);
        assert!(!status.should_tick());
        Ok(())
    }

    #[tokio::test]
    async fn test_silent_peer_times_out() -> Result<(), LivenessError> {
        let config = HeartbeatConfig {
            reply_timeout: Duration::from_millis(20),
            heartbeat_timeout: Duration::from_secs(1),
        };
        let (_silent, mut monitor) = idle_monitor(config).await?;
        let status = monitor.query_status().await;
        assert!(!status.heartbeat_ok);
        assert!(!status.should_tick());
        Ok(())
    }
}
