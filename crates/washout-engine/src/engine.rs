//! Six-axis washout engine
//!
//! `step` is the tick-path operation:
//! - no heap allocations
//! - no locks, no I/O, no blocking
//! - O(1): six axes, one strategy each
//!
//! `initialize`, `reconfigure` and `switch_filter` run outside the tick path;
//! the caller keeps them from overlapping an in-flight `step`.

use crate::config::FilterConfig;
use crate::error::{ConfigResult, RuntimeFault};
use crate::hash::calculate_config_hash;
use crate::stats::EngineStats;
use crate::validation::ConfigValidator;
use tracing::{info, warn};
use washout_filters::{
    AXIS_COUNT, AxisId, AxisStates, AxisVector, FilterKind, FilterState, bypass_filter,
    exponential_filter, gain_clip_filter, is_valid_dt, try_classical_filter,
};

/// Washout filter engine for the six platform axes.
///
/// # Example
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use washout_engine::{FilterConfig, WashoutFilterEngine};
/// use washout_filters::{AxisVector, FilterKind};
///
/// # fn main() -> Result<(), washout_engine::ConfigError> {
/// let mut engine = WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Classical))?;
///
/// let raw = AxisVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// let out = engine.step(raw, 0.05);
/// assert_abs_diff_eq!(out.as_array()[0], 0.96, epsilon = 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WashoutFilterEngine {
    config: FilterConfig,
    states: AxisStates,
    last_output: AxisVector,
    config_hash: u64,
    stats: EngineStats,
}

impl WashoutFilterEngine {
    /// Validate `config` and create an engine with zeroed state for every
    /// axis under both stateful kinds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the axis and field of the first
    /// out-of-range parameter.
    pub fn initialize(config: FilterConfig) -> ConfigResult<Self> {
        ConfigValidator::new().validate_config(&config)?;

        let config_hash = calculate_config_hash(&config);
        info!(
            kind = %config.active,
            config_hash,
            "washout engine initialized"
        );

        Ok(Self {
            config,
            states: AxisStates::default(),
            last_output: AxisVector::splat(0.0),
            config_hash,
            stats: EngineStats::default(),
        })
    }

    /// Run one tick over all six axes.
    ///
    /// Disabled axes emit `0`. A non-finite raw value leaves that axis's
    /// state untouched and repeats its previous output. An invalid `dt` holds
    /// every Classical axis; Exponential and Disabled do not read `dt`. Held
    /// Classical outputs are kept inside the configured clip range.
    #[inline]
    pub fn step(&mut self, raw: AxisVector, dt: f64) -> AxisVector {
        let kind = self.config.active;
        let dt_ok = is_valid_dt(dt);

        if kind == FilterKind::Classical && !dt_ok {
            self.fault(RuntimeFault::InvalidTimeStep { dt });
        }

        let mut output = AxisVector::splat(0.0);
        for axis in AxisId::ALL {
            output[axis] = self.step_axis(kind, axis, raw[axis], dt, dt_ok);
        }

        self.last_output = output;
        self.stats.record_tick();
        output
    }

    /// [`step`](Self::step) over a plain array in [`AxisId::ALL`] order.
    #[inline]
    pub fn step_array(&mut self, raw: [f64; AXIS_COUNT], dt: f64) -> [f64; AXIS_COUNT] {
        self.step(AxisVector::new(raw), dt).into_array()
    }

    #[inline]
    fn step_axis(&mut self, kind: FilterKind, axis: AxisId, raw: f64, dt: f64, dt_ok: bool) -> f64 {
        if !self.config.is_enabled(kind, axis) {
            return 0.0;
        }

        if !raw.is_finite() {
            self.fault(RuntimeFault::NonFiniteInput { axis, value: raw });
            return self.held_output(kind, axis);
        }

        let state = &mut self.states[axis];
        match kind {
            FilterKind::Disabled => bypass_filter(raw),
            FilterKind::Exponential => {
                exponential_filter(raw, &mut state.exponential, self.config.exponential.decay[axis])
            }
            FilterKind::Classical => {
                if !dt_ok {
                    return self.held_output(kind, axis);
                }
                let params = &self.config.classical;
                let shaped = try_classical_filter(raw, &mut state.classical, params.tau[axis], dt)
                    .map(|high_passed| gain_clip_filter(high_passed, params.gain, params.clip))
                    .filter(|shaped| shaped.is_finite());
                match shaped {
                    Some(shaped) => shaped,
                    None => {
                        self.fault(RuntimeFault::NonFiniteOutput { axis });
                        self.held_output(kind, axis)
                    }
                }
            }
        }
    }

    /// Previous output of `axis`, clipped when Classical is active.
    #[inline]
    fn held_output(&self, kind: FilterKind, axis: AxisId) -> f64 {
        let held = self.last_output[axis];
        match (kind, self.config.classical.clip) {
            (FilterKind::Classical, Some(clip)) => clip.apply(held),
            _ => held,
        }
    }

    fn fault(&mut self, fault: RuntimeFault) {
        self.stats.record_fault(fault);
        warn!(code = fault.code(), axis = ?fault.axis(), "{fault}; holding previous output");
    }

    /// Change the active kind and zero all filter memory.
    ///
    /// Always a discontinuity: the first tick afterwards matches a freshly
    /// initialized engine of `kind`, whatever ran before.
    pub fn switch_filter(&mut self, kind: FilterKind) {
        let previous = self.config.active;
        self.config.active = kind;
        self.config_hash = calculate_config_hash(&self.config);
        self.reset();
        self.stats.record_switch();
        info!(from = %previous, to = %kind, "washout filter switched");
    }

    /// Validate and adopt a new configuration, zeroing all filter memory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` is invalid; the engine then keeps
    /// running with its previous configuration and state.
    pub fn reconfigure(&mut self, config: FilterConfig) -> ConfigResult {
        if let Err(err) = ConfigValidator::new().validate_config(&config) {
            warn!(error = %err, "reconfigure rejected; keeping previous configuration");
            return Err(err);
        }

        self.config = config;
        self.config_hash = calculate_config_hash(&config);
        self.reset();
        self.stats.record_reconfigure();
        info!(
            kind = %config.active,
            config_hash = self.config_hash,
            "washout engine reconfigured"
        );
        Ok(())
    }

    /// Zero every axis's filter memory and the held outputs.
    pub fn reset(&mut self) {
        self.states.reset();
        self.last_output = AxisVector::splat(0.0);
    }

    /// Active kind.
    #[must_use]
    pub fn active_kind(&self) -> FilterKind {
        self.config.active
    }

    /// Accepted configuration.
    #[must_use]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Hash of the accepted configuration.
    #[must_use]
    pub fn config_hash(&self) -> u64 {
        self.config_hash
    }

    /// Counters since initialize.
    #[must_use]
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Output of the most recent tick (zero before the first).
    #[must_use]
    pub fn last_output(&self) -> AxisVector {
        self.last_output
    }

    /// Read-only view of the per-axis filter memory.
    #[must_use]
    pub fn axis_states(&self) -> &AxisStates {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::error::ConfigError;
    use washout_filters::ClipRange;

    type TestResult = Result<(), ConfigError>;

    fn surge(value: f64) -> AxisVector {
        let mut raw = AxisVector::splat(0.0);
        raw[AxisId::X] = value;
        raw
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let config = FilterConfig::new(FilterKind::Classical).with_tau(AxisId::Z, 0.0);
        let result = WashoutFilterEngine::initialize(config);
        assert!(matches!(
            result,
            Err(ConfigError::AxisParamOutOfRange { axis: AxisId::Z, .. })
        ));
    }

    #[test]
    fn test_initial_state_is_zeroed() -> TestResult {
        let engine = WashoutFilterEngine::initialize(FilterConfig::default())?;
        assert!(engine.axis_states().iter().all(|(_, s)| s.is_zeroed()));
        assert_eq!(engine.stats().ticks, 0);
        Ok(())
    }

    #[test]
    fn test_classical_first_tick() -> TestResult {
        let mut engine = WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Classical))?;
        let out = engine.step(surge(1.0), 0.05);
        assert_abs_diff_eq!(out[AxisId::X], 0.96, epsilon = 1e-12);
        assert_abs_diff_eq!(out[AxisId::Y], 0.0);
        Ok(())
    }

    #[test]
    fn test_gain_and_clip_do_not_feed_back() -> TestResult {
        let plain = FilterConfig::new(FilterKind::Classical);
        let shaped = plain.with_gain(2.0).with_clip(ClipRange::symmetric(10.0));
        let mut a = WashoutFilterEngine::initialize(plain)?;
        let mut b = WashoutFilterEngine::initialize(shaped)?;

        for raw in [1.0, 1.0, 0.5, 0.0, -0.3, 0.0] {
            let pa = a.step(surge(raw), 0.05)[AxisId::X];
            let pb = b.step(surge(raw), 0.05)[AxisId::X];
            assert_abs_diff_eq!(pb, 2.0 * pa, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_gain_and_clip_ignored_by_exponential() -> TestResult {
        let config = FilterConfig::new(FilterKind::Exponential)
            .with_gain(3.0)
            .with_clip(ClipRange::symmetric(0.1));
        let mut engine = WashoutFilterEngine::initialize(config)?;
        let out = engine.step(surge(0.8), 0.05);
        assert_abs_diff_eq!(out[AxisId::X], 0.8);
        Ok(())
    }

    #[test]
    fn test_invalid_dt_holds_classical() -> TestResult {
        let mut engine = WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Classical))?;
        let first = engine.step(surge(1.0), 0.05);
        let state_before = *engine.axis_states();

        let held = engine.step(surge(1.0), 0.0);
        assert_eq!(held, first);
        assert_eq!(*engine.axis_states(), state_before);
        assert_eq!(engine.stats().dt_faults, 1);
        Ok(())
    }

    #[test]
    fn test_invalid_dt_ignored_by_exponential() -> TestResult {
        let mut engine =
            WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Exponential))?;
        let out = engine.step(surge(0.5), f64::NAN);
        assert_abs_diff_eq!(out[AxisId::X], 0.5);
        assert_eq!(engine.stats().dt_faults, 0);
        Ok(())
    }

    #[test]
    fn test_output_overflow_holds_previous() -> TestResult {
        let config = FilterConfig::new(FilterKind::Classical).with_gain(f64::MAX);
        let mut engine = WashoutFilterEngine::initialize(config)?;
        let out = engine.step(surge(10.0), 0.05);
        assert_abs_diff_eq!(out[AxisId::X], 0.0);
        assert_eq!(engine.stats().output_faults, 1);
        Ok(())
    }

    #[test]
    fn test_reconfigure_failure_keeps_previous() -> TestResult {
        let mut engine = WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Classical))?;
        engine.step(surge(1.0), 0.05);
        let hash = engine.config_hash();

        let bad = FilterConfig::new(FilterKind::Exponential).with_decay(AxisId::Roll, 2.0);
        assert!(engine.reconfigure(bad).is_err());
        assert_eq!(engine.active_kind(), FilterKind::Classical);
        assert_eq!(engine.config_hash(), hash);
        assert!(!engine.axis_states()[AxisId::X].is_zeroed());
        assert_eq!(engine.stats().reconfigurations, 0);
        Ok(())
    }

    #[test]
    fn test_reconfigure_resets_state() -> TestResult {
        let mut engine = WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Classical))?;
        engine.step(surge(1.0), 0.05);
        engine.reconfigure(FilterConfig::new(FilterKind::Classical).with_gain(0.5))?;

        assert!(engine.axis_states().iter().all(|(_, s)| s.is_zeroed()));
        assert_eq!(engine.last_output(), AxisVector::splat(0.0));
        assert_eq!(engine.stats().reconfigurations, 1);
        Ok(())
    }

    #[test]
    fn test_switch_updates_hash() -> TestResult {
        let mut engine = WashoutFilterEngine::initialize(FilterConfig::new(FilterKind::Classical))?;
        let before = engine.config_hash();
        engine.switch_filter(FilterKind::Exponential);
        assert_ne!(engine.config_hash(), before);
        assert_eq!(engine.config_hash(), calculate_config_hash(engine.config()));
        assert_eq!(engine.stats().switches, 1);
        Ok(())
    }
}
