//! Engine counters
//!
//! Plain integers updated inside `step`; reading them never blocks the tick.

use crate::error::RuntimeFault;
use serde::Serialize;

/// Running counters for one engine instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EngineStats {
    /// `step` calls since initialize
    pub ticks: u64,
    /// Axis-ticks whose raw input was NaN or infinite
    pub input_faults: u64,
    /// Ticks with an unusable `dt` while Classical was active
    pub dt_faults: u64,
    /// Axis-ticks whose gained output was not finite
    pub output_faults: u64,
    /// Successful `reconfigure` calls
    pub reconfigurations: u64,
    /// `switch_filter` calls
    pub switches: u64,
    /// Most recent fault, if any
    pub last_fault: Option<RuntimeFault>,
}

impl EngineStats {
    /// Total recovered faults of every kind.
    #[must_use]
    pub fn total_faults(&self) -> u64 {
        self.input_faults
            .saturating_add(self.dt_faults)
            .saturating_add(self.output_faults)
    }

    pub(crate) fn record_tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub(crate) fn record_fault(&mut self, fault: RuntimeFault) {
        let counter = match fault {
            RuntimeFault::NonFiniteInput { .. } => &mut self.input_faults,
            RuntimeFault::InvalidTimeStep { .. } => &mut self.dt_faults,
            RuntimeFault::NonFiniteOutput { .. } => &mut self.output_faults,
        };
        *counter = counter.saturating_add(1);
        self.last_fault = Some(fault);
    }

    pub(crate) fn record_reconfigure(&mut self) {
        self.reconfigurations = self.reconfigurations.saturating_add(1);
    }

    pub(crate) fn record_switch(&mut self) {
        self.switches = self.switches.saturating_add(1);
    }
}
