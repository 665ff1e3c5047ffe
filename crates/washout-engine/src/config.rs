//! Filter Configuration
//!
//! [`FilterConfig`] is an immutable snapshot of every tunable the engine
//! reads: the active kind plus per-kind parameter blocks. Every kind carries
//! its own per-axis `enabled` flags, so switching kinds also switches which
//! axes are forced to neutral.

use serde::{Deserialize, Serialize};
use washout_filters::{AxisArray, AxisId, AxisVector, ClipRange, FilterKind};

/// Default exponential decay per tick (≈95% washed out in ~3 s at 20 Hz).
pub const DEFAULT_DECAY: f64 = 0.02;

/// Default classical time constant in seconds.
pub const DEFAULT_TAU: f64 = 1.2;

/// Default classical output gain.
pub const DEFAULT_GAIN: f64 = 1.0;

/// Per-axis enabled flags.
pub type AxisFlags = AxisArray<bool>;

/// Parameters for the pass-through kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BypassParams {
    /// Axes that pass through; the rest output zero
    pub enabled: AxisFlags,
}

impl Default for BypassParams {
    fn default() -> Self {
        Self {
            enabled: AxisFlags::splat(true),
        }
    }
}

/// Parameters for the exponential kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialParams {
    /// Fraction of output removed per receding tick, in `(0, 1]`
    pub decay: AxisVector,
    /// Axes that are filtered; the rest output zero
    pub enabled: AxisFlags,
}

impl Default for ExponentialParams {
    fn default() -> Self {
        Self {
            decay: AxisVector::splat(DEFAULT_DECAY),
            enabled: AxisFlags::splat(true),
        }
    }
}

/// Parameters for the classical kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassicalParams {
    /// High-pass time constant in seconds, `> 0`
    pub tau: AxisVector,
    /// Output gain shared by all axes
    pub gain: f64,
    /// Optional final output range, applied after gain
    pub clip: Option<ClipRange>,
    /// Axes that are filtered; the rest output zero
    pub enabled: AxisFlags,
}

impl Default for ClassicalParams {
    fn default() -> Self {
        Self {
            tau: AxisVector::splat(DEFAULT_TAU),
            gain: DEFAULT_GAIN,
            clip: None,
            enabled: AxisFlags::splat(true),
        }
    }
}

/// Complete engine configuration.
///
/// Construct with [`FilterConfig::new`] and the `with_*` builders, then hand
/// it to the engine, which validates it before accepting it.
///
/// ```
/// use washout_engine::FilterConfig;
/// use washout_filters::{AxisId, ClipRange, FilterKind};
///
/// let config = FilterConfig::new(FilterKind::Classical)
///     .with_tau(AxisId::Roll, 2.2)
///     .with_gain(0.8)
///     .with_clip(ClipRange::symmetric(1.0));
///
/// assert_eq!(config.active, FilterKind::Classical);
/// assert!(config.is_enabled(FilterKind::Classical, AxisId::Roll));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Kind used by `step`
    pub active: FilterKind,
    /// Pass-through parameters
    pub disabled: BypassParams,
    /// Exponential parameters
    pub exponential: ExponentialParams,
    /// Classical parameters
    pub classical: ClassicalParams,
}

impl FilterConfig {
    /// Default parameters with `active` selected.
    #[must_use]
    pub fn new(active: FilterKind) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    /// Select the active kind.
    #[must_use]
    pub fn with_active(mut self, kind: FilterKind) -> Self {
        self.active = kind;
        self
    }

    /// Set the exponential decay for one axis.
    #[must_use]
    pub fn with_decay(mut self, axis: AxisId, decay: f64) -> Self {
        self.exponential.decay[axis] = decay;
        self
    }

    /// Set the classical time constant for one axis.
    #[must_use]
    pub fn with_tau(mut self, axis: AxisId, tau: f64) -> Self {
        self.classical.tau[axis] = tau;
        self
    }

    /// Set the shared classical gain.
    #[must_use]
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.classical.gain = gain;
        self
    }

    /// Set the classical output clip.
    #[must_use]
    pub fn with_clip(mut self, clip: ClipRange) -> Self {
        self.classical.clip = Some(clip);
        self
    }

    /// Set one axis's enabled flag for one kind.
    #[must_use]
    pub fn with_enabled(mut self, kind: FilterKind, axis: AxisId, enabled: bool) -> Self {
        self.set_enabled(kind, axis, enabled);
        self
    }

    /// Enabled flags of `kind`.
    #[must_use]
    pub fn enabled(&self, kind: FilterKind) -> &AxisFlags {
        match kind {
            FilterKind::Disabled => &self.disabled.enabled,
            FilterKind::Exponential => &self.exponential.enabled,
            FilterKind::Classical => &self.classical.enabled,
        }
    }

    fn enabled_mut(&mut self, kind: FilterKind) -> &mut AxisFlags {
        match kind {
            FilterKind::Disabled => &mut self.disabled.enabled,
            FilterKind::Exponential => &mut self.exponential.enabled,
            FilterKind::Classical => &mut self.classical.enabled,
        }
    }

    /// Whether `axis` is enabled under `kind`.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self, kind: FilterKind, axis: AxisId) -> bool {
        self.enabled(kind)[axis]
    }

    /// Whether `axis` is enabled under the active kind.
    #[inline]
    #[must_use]
    pub fn is_active_enabled(&self, axis: AxisId) -> bool {
        self.is_enabled(self.active, axis)
    }

    /// Set one axis's enabled flag for one kind.
    pub fn set_enabled(&mut self, kind: FilterKind, axis: AxisId, enabled: bool) {
        self.enabled_mut(kind)[axis] = enabled;
    }

    /// Force `axis` to neutral under every kind.
    pub fn disable_axis(&mut self, axis: AxisId) {
        for kind in FilterKind::ALL {
            self.set_enabled(kind, axis, false);
        }
    }

    /// Axes enabled under the active kind, in axis order.
    pub fn active_axes(&self) -> impl Iterator<Item = AxisId> + '_ {
        AxisId::ALL
            .into_iter()
            .filter(move |&axis| self.is_active_enabled(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.active, FilterKind::Disabled);
        for axis in AxisId::ALL {
            assert_abs_diff_eq!(config.exponential.decay[axis], DEFAULT_DECAY);
            assert_abs_diff_eq!(config.classical.tau[axis], DEFAULT_TAU);
            for kind in FilterKind::ALL {
                assert!(config.is_enabled(kind, axis));
            }
        }
        assert!(config.classical.clip.is_none());
    }

    #[test]
    fn test_builders_touch_single_axis() {
        let config = FilterConfig::new(FilterKind::Exponential)
            .with_decay(AxisId::Z, 0.015)
            .with_tau(AxisId::Yaw, 1.5);

        assert_abs_diff_eq!(config.exponential.decay[AxisId::Z], 0.015);
        assert_abs_diff_eq!(config.exponential.decay[AxisId::X], DEFAULT_DECAY);
        assert_abs_diff_eq!(config.classical.tau[AxisId::Yaw], 1.5);
    }

    #[test]
    fn test_enabled_flags_are_per_kind() {
        let config =
            FilterConfig::new(FilterKind::Classical).with_enabled(FilterKind::Classical, AxisId::Y, false);

        assert!(!config.is_enabled(FilterKind::Classical, AxisId::Y));
        assert!(config.is_enabled(FilterKind::Exponential, AxisId::Y));
        assert!(!config.is_active_enabled(AxisId::Y));
        assert_eq!(config.active_axes().count(), 5);
    }

    #[test]
    fn test_disable_axis_covers_every_kind() {
        let mut config = FilterConfig::default();
        config.disable_axis(AxisId::Roll);
        for kind in FilterKind::ALL {
            assert!(!config.is_enabled(kind, AxisId::Roll));
            assert!(config.is_enabled(kind, AxisId::Pitch));
        }
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), serde_json::Error> {
        let config = FilterConfig::new(FilterKind::Classical)
            .with_clip(ClipRange::new(-0.5, 0.75))
            .with_gain(1.5);
        let json = serde_json::to_string(&config)?;
        assert!(json.contains("\"active\":\"classical\""));
        let back: FilterConfig = serde_json::from_str(&json)?;
        assert_eq!(back, config);
        Ok(())
    }
}
