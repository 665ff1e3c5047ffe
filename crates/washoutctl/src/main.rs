//! washoutctl - Washout Engine Control CLI
//!
//! Checks washout profiles, replays recorded motion telemetry through the
//! engine, and runs or queries the liveness responder that gates ticking.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;
mod telemetry;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CheckArgs, LivenessCommands, ReplayArgs};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "washoutctl")]
#[command(about = "Washout Engine CLI - check profiles, replay telemetry, query liveness")]
#[command(version)]
#[command(long_about = "
washoutctl works with the washout filter engine of a six-axis motion platform.
It validates profiles, replays recorded telemetry through the engine as scope
trace lines, and runs the UDP liveness responder used to gate ticking.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a profile and report the accepted configuration and warnings
    Check(CheckArgs),

    /// Replay a telemetry CSV through the engine, printing trace lines
    Replay(ReplayArgs),

    /// Liveness responder and heartbeat commands
    #[command(subcommand)]
    Liveness(LivenessCommands),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_err| {
                format!(
                    "washoutctl={log_level},washout_engine={log_level},\
                     washout_config={log_level},washout_liveness={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check(args) => commands::check::execute(args, cli.json),
        Commands::Replay(args) => commands::replay::execute(args, cli.json).await,
        Commands::Liveness(cmd) => commands::liveness::execute(cmd, cli.json).await,
    }
}
