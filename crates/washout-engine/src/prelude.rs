//! Prelude for the washout engine crate.
//!
//! Re-exports the engine types together with the filter-level vocabulary
//! (`AxisId`, `AxisVector`, `FilterKind`, `ClipRange`) callers need to build
//! configurations and feed ticks.

pub use crate::config::{ClassicalParams, ExponentialParams, FilterConfig};
pub use crate::engine::WashoutFilterEngine;
pub use crate::error::{ConfigError, RuntimeFault};
pub use crate::hash::calculate_config_hash;
pub use crate::state::EngineStateSnapshot;
pub use crate::stats::EngineStats;
pub use crate::trace::TraceLine;
pub use crate::validation::ConfigValidator;

pub use washout_filters::{AXIS_COUNT, AxisId, AxisVector, ClipRange, FilterKind};
