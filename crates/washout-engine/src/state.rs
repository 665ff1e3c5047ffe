//! Engine state snapshots for debugging and analysis

use crate::engine::WashoutFilterEngine;
use serde::Serialize;
use washout_filters::{AxisVector, FilterKind};

/// Point-in-time view of an engine, safe to log or serialize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineStateSnapshot {
    /// Active kind
    pub active: FilterKind,
    /// Hash of the accepted configuration
    pub config_hash: u64,
    /// `step` calls since initialize
    pub ticks: u64,
    /// Output of the most recent tick
    pub last_output: AxisVector,
    /// Whether every axis's filter memory is zero
    pub state_zeroed: bool,
}

impl WashoutFilterEngine {
    /// Create a state snapshot.
    #[must_use]
    pub fn state_snapshot(&self) -> EngineStateSnapshot {
        EngineStateSnapshot {
            active: self.active_kind(),
            config_hash: self.config_hash(),
            ticks: self.stats().ticks,
            last_output: self.last_output(),
            state_zeroed: self.axis_states().iter().all(|(_, state)| state.is_zeroed()),
        }
    }
}
