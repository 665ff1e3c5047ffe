//! Six-Axis Washout Filter Engine
//!
//! Turns a periodic vector of raw per-axis motion commands into actuator-safe
//! commands that always return to neutral.
//!
//! # Overview
//!
//! - **FilterConfig**: immutable snapshot of the active kind and every
//!   per-kind, per-axis tunable
//! - **ConfigValidator**: range checks run before any engine accepts a config
//! - **WashoutFilterEngine**: `step` once per tick; `switch_filter` and
//!   `reconfigure` between ticks
//! - **EngineStats / EngineStateSnapshot**: counters and a loggable view
//! - **TraceLine**: the per-tick text line consumed by the scope viewer
//!
//! # RT Safety Guarantees
//!
//! - **No heap allocations** in `WashoutFilterEngine::step()`
//! - **O(1)** per tick: six axes, one strategy each
//! - **No internal threading**: the caller owns the tick
//!
//! # Fault handling
//!
//! ```text
//! initialize / reconfigure ── invalid ──► ConfigError (previous config kept)
//! step ── NaN input / bad dt / overflow ──► RuntimeFault (counted, output held)
//! ```
//!
//! # Example
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use washout_engine::prelude::*;
//!
//! # fn main() -> Result<(), ConfigError> {
//! let config = FilterConfig::new(FilterKind::Exponential).with_decay(AxisId::X, 0.025);
//! let mut engine = WashoutFilterEngine::initialize(config)?;
//!
//! let mut raw = AxisVector::splat(0.0);
//! raw[AxisId::X] = 1.0;
//! let rise = engine.step(raw, 0.05);
//! assert_abs_diff_eq!(rise[AxisId::X], 1.0);
//!
//! // Stimulus removed: output decays by 2.5% per tick
//! raw[AxisId::X] = 0.0;
//! let decay = engine.step(raw, 0.05);
//! assert_abs_diff_eq!(decay[AxisId::X], 0.975, epsilon = 1e-12);
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod engine;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod state;
pub mod stats;
pub mod trace;
pub mod validation;

pub use config::{
    AxisFlags, BypassParams, ClassicalParams, DEFAULT_DECAY, DEFAULT_GAIN, DEFAULT_TAU,
    ExponentialParams, FilterConfig,
};
pub use engine::WashoutFilterEngine;
pub use error::{ConfigError, ConfigResult, RuntimeFault};
pub use hash::calculate_config_hash;
pub use state::EngineStateSnapshot;
pub use stats::EngineStats;
pub use trace::{PRE_WASHED_TAG, SCOPE_PORT, TraceLine, TraceParseError, WASHED_TAG};
pub use validation::{ConfigValidator, is_valid_decay, is_valid_tau};
