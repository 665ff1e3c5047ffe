//! Wire protocol: a literal request and a one-word reply, one datagram each.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::LivenessError;

/// Request payload.
pub const STATUS_REQUEST: &str = "status";

/// Default responder port.
pub const DEFAULT_LIVENESS_PORT: u16 = 10021;

/// Largest datagram either side reads.
pub const MAX_DATAGRAM: usize = 64;

/// Whether a datagram is a status request. Surrounding whitespace is ignored.
#[must_use]
pub fn is_status_request(payload: &[u8]) -> bool {
    core::str::from_utf8(payload).is_ok_and(|text| text.trim() == STATUS_REQUEST)
}

/// Reply to a status request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusReply {
    /// The watched application is alive
    Running,
    /// The watched application was not found
    NotRunning,
}

impl StatusReply {
    /// Reply for a detection result.
    #[must_use]
    pub const fn from_running(running: bool) -> Self {
        if running {
            StatusReply::Running
        } else {
            StatusReply::NotRunning
        }
    }

    /// Payload text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusReply::Running => "running",
            StatusReply::NotRunning => "not_running",
        }
    }

    /// Whether the application is alive.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, StatusReply::Running)
    }
}

impl fmt::Display for StatusReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusReply {
    type Err = LivenessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(StatusReply::Running),
            "not_running" => Ok(StatusReply::NotRunning),
            other => Err(LivenessError::UnexpectedReply(other.to_string())),
        }
    }
}
