//! Liveness responder and heartbeat query commands

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};
use washout_liveness::{
    HeartbeatConfig, HeartbeatMonitor, LivenessResponder, LivenessStatus, SysinfoDetector,
};

use crate::commands::LivenessCommands;
use crate::error::CliError;
use crate::output;

/// Execute liveness commands
pub async fn execute(cmd: &LivenessCommands, json: bool) -> Result<()> {
    match cmd {
        LivenessCommands::Serve { bind, process } => serve(*bind, process).await,
        LivenessCommands::Query {
            target,
            timeout_ms,
            count,
            interval_ms,
        } => {
            let config = HeartbeatConfig {
                reply_timeout: Duration::from_millis(*timeout_ms),
                ..HeartbeatConfig::default()
            };
            query(*target, config, *count, Duration::from_millis(*interval_ms), json).await
        }
    }
}

async fn serve(bind: SocketAddr, process: &str) -> Result<()> {
    let responder = LivenessResponder::bind(bind, SysinfoDetector::new(process))
        .await
        .map_err(CliError::from)?;
    let local = responder.local_addr().map_err(CliError::from)?;
    info!(bind = %local, process, "serving liveness; Ctrl-C to stop");

    let replies = responder
        .serve_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "cannot listen for Ctrl-C; stopping");
            }
        })
        .await;
    info!(replies, "liveness responder stopped");
    Ok(())
}

async fn query(
    target: SocketAddr,
    config: HeartbeatConfig,
    count: u32,
    interval: Duration,
    json: bool,
) -> Result<()> {
    let mut monitor = HeartbeatMonitor::connect(target, config)
        .await
        .map_err(CliError::from)?;

    let mut status = LivenessStatus::default();
    for poll in 0..count {
        if poll > 0 {
            tokio::time::sleep(interval).await;
        }
        status = monitor.query_status().await;
        output::print_liveness_status(&status, json);
    }

    if status.should_tick() {
        Ok(())
    } else {
        Err(CliError::NotReady {
            target,
            heartbeat_ok: status.heartbeat_ok,
            app_running: status.app_running,
        }
        .into())
    }
}
