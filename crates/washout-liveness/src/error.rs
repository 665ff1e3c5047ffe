//! Liveness errors.

use std::net::SocketAddr;

use thiserror::Error;

/// Result type for liveness operations.
pub type LivenessResult<T> = Result<T, LivenessError>;

/// Liveness collaborator failure.
#[derive(Debug, Error)]
pub enum LivenessError {
    /// Binding the UDP socket failed.
    #[error("failed to bind liveness socket on {addr}: {source}")]
    Bind {
        /// Requested address
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Socket I/O failed after binding.
    #[error("liveness socket error: {0}")]
    Io(#[from] std::io::Error),

    /// A reply payload was not a known status.
    #[error("unexpected liveness reply '{0}'")]
    UnexpectedReply(String),
}
