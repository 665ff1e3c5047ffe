//! Heartbeat and liveness gating for the washout engine.
//!
//! A [`LivenessResponder`] runs on the simulator host and answers `status`
//! datagrams with `running` or `not_running` according to a
//! [`ProcessDetector`]. The platform side polls it through a
//! [`HeartbeatMonitor`] and only ticks the washout engine while
//! [`LivenessStatus::should_tick`] holds.
//!
//! ```no_run
//! # async fn demo() -> Result<(), washout_liveness::LivenessError> {
//! use washout_liveness::{HeartbeatConfig, HeartbeatMonitor};
//!
//! let target = std::net::SocketAddr::from(([192, 168, 1, 20], 10021));
//! let mut monitor = HeartbeatMonitor::connect(target, HeartbeatConfig::default()).await?;
//! if monitor.query_status().await.should_tick() {
//!     // run one washout step
//! }
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]
#![deny(unused_must_use)]

pub mod detector;
pub mod error;
pub mod monitor;
pub mod protocol;
pub mod responder;

pub use detector::{ProcessDetector, StaticDetector, SysinfoDetector};
pub use error::{LivenessError, LivenessResult};
pub use monitor::{HeartbeatConfig, HeartbeatMonitor, LivenessStatus};
pub use protocol::{
    DEFAULT_LIVENESS_PORT, MAX_DATAGRAM, STATUS_REQUEST, StatusReply, is_status_request,
};
pub use responder::LivenessResponder;

/// Environment variable overriding the responder bind address.
pub const BIND_ENV: &str = "WASHOUT_LIVENESS_BIND";

/// Environment variable naming the responder the monitor polls.
pub const TARGET_ENV: &str = "WASHOUT_LIVENESS_TARGET";
