//! Error types for washoutctl

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration rejected: {0}")]
    Config(#[from] washout_config::LoadError),

    #[error("Configuration has {count} warning(s) and --strict was given")]
    StrictWarnings { count: usize },

    #[error("Cannot read telemetry {}: {source}", path.display())]
    TelemetryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Telemetry {} contains no usable samples", path.display())]
    EmptyTelemetry { path: PathBuf },

    #[error("Liveness error: {0}")]
    Liveness(#[from] washout_liveness::LivenessError),

    #[error("Host at {target} is not ready (heartbeat_ok={heartbeat_ok}, app_running={app_running})")]
    NotReady {
        target: SocketAddr,
        heartbeat_ok: bool,
        app_running: bool,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::TelemetryIo { .. } | CliError::EmptyTelemetry { .. } => 2,
            CliError::NotReady { .. } => 3,
            CliError::Config(_) | CliError::StrictWarnings { .. } => 4,
            CliError::Liveness(_) => 5,
            CliError::IoError(_) | CliError::JsonError(_) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::Config(_) => "config",
            CliError::StrictWarnings { .. } => "strict_warnings",
            CliError::TelemetryIo { .. } => "telemetry_io",
            CliError::EmptyTelemetry { .. } => "empty_telemetry",
            CliError::Liveness(_) => "liveness",
            CliError::NotReady { .. } => "not_ready",
            CliError::IoError(_) => "io",
            CliError::JsonError(_) => "json",
        }
    }
}
