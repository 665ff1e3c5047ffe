//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;
use washout_config::{ConfigWarning, LoadReport};
use washout_engine::{EngineStats, FilterConfig};
use washout_filters::{AxisId, FilterKind};
use washout_liveness::LivenessStatus;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error.downcast_ref::<CliError>().map_or("internal", CliError::type_name),
        }
    });
    print_json(&error_json);
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Pretty-print any serializable value.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print the result of `check`.
pub fn print_check_report(report: &LoadReport, config_hash: u64, json: bool) {
    if json {
        print_json(&json!({
            "success": true,
            "config_hash": format!("{config_hash:016x}"),
            "report": report,
        }));
        return;
    }

    let config = &report.config;
    println!(
        "{} {} ({})",
        "Active filter:".bold(),
        config.active.name().green(),
        format!("{config_hash:016x}").dimmed()
    );
    for kind in FilterKind::ALL {
        print_kind_summary(config, kind);
    }
    print_warnings(&report.warnings);
}

fn print_kind_summary(config: &FilterConfig, kind: FilterKind) {
    let marker = if kind == config.active { "●".green() } else { "○".dimmed() };
    let axes: Vec<String> = AxisId::ALL
        .into_iter()
        .map(|axis| {
            let detail = match kind {
                FilterKind::Disabled => String::new(),
                FilterKind::Exponential => format!("={}", config.exponential.decay[axis]),
                FilterKind::Classical => format!("={}", config.classical.tau[axis]),
            };
            let text = format!("{axis}{detail}");
            if config.is_enabled(kind, axis) {
                text
            } else {
                format!("{text} (off)").dimmed().to_string()
            }
        })
        .collect();
    println!("  {} {:<12} {}", marker, kind.name(), axes.join("  "));

    if kind == FilterKind::Classical {
        let params = &config.classical;
        let clip = params
            .clip
            .map_or_else(|| "none".to_string(), |c| format!("{}:{}", c.min, c.max));
        println!("    gain={}  clip={}", params.gain, clip);
    }
}

fn print_warnings(warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        println!("{}", "No warnings".green());
        return;
    }
    println!("{} {}", "Warnings:".yellow().bold(), warnings.len());
    for warning in warnings {
        println!("  {} {}", "⚠".yellow(), warning);
    }
}

/// Print the end-of-replay summary.
pub fn print_replay_summary(
    vehicle: Option<&str>,
    samples: usize,
    skipped: usize,
    kind: FilterKind,
    stats: &EngineStats,
) {
    eprintln!(
        "{} {} samples ({} skipped) from {} through {}; faults: {}",
        "Replayed".green().bold(),
        samples,
        skipped,
        vehicle.unwrap_or("unknown vehicle"),
        kind.name(),
        stats.total_faults()
    );
}

/// Print a liveness query result.
pub fn print_liveness_status(status: &LivenessStatus, json: bool) {
    if json {
        print_json(&json!({
            "success": status.should_tick(),
            "status": status,
            "should_tick": status.should_tick(),
        }));
        return;
    }

    let flag = |ok: bool| if ok { "yes".green() } else { "no".red() };
    println!("heartbeat:   {}", flag(status.heartbeat_ok));
    println!("app running: {}", flag(status.app_running));
}
