//! Command implementations for washoutctl

pub mod check;
pub mod liveness;
pub mod replay;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use washout_filters::FilterKind;

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Profile file to load
    #[arg(required_unless_present = "filter", conflicts_with = "filter")]
    pub config: Option<PathBuf>,

    /// Compact filter string instead of a file, e.g. "classical:tau=1.2,gain=0.8"
    #[arg(long)]
    pub filter: Option<String>,

    /// Fail if the profile loaded with warnings
    #[arg(long)]
    pub strict: bool,

    /// Write the normalized profile to this path
    #[arg(long, value_name = "PATH")]
    pub write: Option<PathBuf>,
}

/// Arguments for `replay`.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Profile file to load
    pub config: PathBuf,

    /// Telemetry CSV (t,x,y,z,roll,pitch,yaw per row)
    pub telemetry: PathBuf,

    /// Override the profile's active filter
    #[arg(long)]
    pub kind: Option<FilterKind>,

    /// Also send each trace line to a scope over UDP
    #[arg(long, value_name = "ADDR")]
    pub scope: Option<SocketAddr>,

    /// Pace ticks by their dt instead of running flat out
    #[arg(long)]
    pub realtime: bool,
}

#[derive(Subcommand, Debug)]
pub enum LivenessCommands {
    /// Answer status requests for a local process
    Serve {
        /// Address to bind
        #[arg(long, env = washout_liveness::BIND_ENV, default_value = "0.0.0.0:10021")]
        bind: SocketAddr,

        /// Case-insensitive substring of the process name to watch
        #[arg(long)]
        process: String,
    },

    /// Poll a responder and report heartbeat and application state
    Query {
        /// Responder address
        #[arg(long, env = washout_liveness::TARGET_ENV, default_value = "127.0.0.1:10021")]
        target: SocketAddr,

        /// How long to wait for each reply, in milliseconds
        #[arg(long, default_value_t = 200)]
        timeout_ms: u64,

        /// Number of polls
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Delay between polls, in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
}
