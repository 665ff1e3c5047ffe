//! Telemetry replay through the washout engine

use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};
use washout_config::load_config_file;
use washout_engine::{TraceLine, WashoutFilterEngine};

use crate::commands::ReplayArgs;
use crate::error::CliError;
use crate::output;
use crate::telemetry::parse_telemetry_csv;

/// Run every recorded sample through an engine built from the profile.
pub async fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let report = load_config_file(&args.config).map_err(CliError::from)?;
    let mut engine = WashoutFilterEngine::initialize(report.config)
        .map_err(|e| CliError::Config(e.into()))?;
    if let Some(kind) = args.kind {
        engine.switch_filter(kind);
    }

    let text = tokio::fs::read_to_string(&args.telemetry)
        .await
        .map_err(|source| CliError::TelemetryIo {
            path: args.telemetry.clone(),
            source,
        })?;
    let recording = parse_telemetry_csv(&text);
    if recording.samples.is_empty() {
        return Err(CliError::EmptyTelemetry {
            path: args.telemetry.clone(),
        }
        .into());
    }

    let scope = match args.scope {
        Some(addr) => {
            let local = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
            let socket = UdpSocket::bind(local).await?;
            socket.connect(addr).await?;
            info!(scope = %addr, "streaming trace lines");
            Some(socket)
        }
        None => None,
    };

    info!(
        vehicle = recording.vehicle.as_deref().unwrap_or("unknown"),
        samples = recording.samples.len(),
        kind = %engine.active_kind(),
        "replay starting"
    );

    let mut trace = Vec::new();
    for (dt, sample) in recording.ticks() {
        let washed = engine.step(sample.raw, dt);
        let line = TraceLine::new(sample.raw, washed).to_string();

        if let Some(socket) = &scope {
            if let Err(e) = socket.send(line.as_bytes()).await {
                warn!(line = sample.line, error = %e, "scope send failed");
            }
        }
        if json {
            trace.push(line);
        } else {
            println!("{line}");
        }
        debug!(line = sample.line, t = sample.t, dt, "tick");

        if args.realtime {
            tokio::time::sleep(Duration::try_from_secs_f64(dt).unwrap_or_default()).await;
        }
    }

    if json {
        output::print_json(&json!({
            "success": true,
            "recording": recording,
            "samples": recording.samples.len(),
            "stats": engine.stats(),
            "state": engine.state_snapshot(),
            "trace": trace,
        }));
    } else {
        output::print_replay_summary(
            recording.vehicle.as_deref(),
            recording.samples.len(),
            recording.skipped_rows,
            engine.active_kind(),
            engine.stats(),
        );
    }
    Ok(())
}
