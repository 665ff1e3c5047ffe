//! Configuration validation
//!
//! Every parameter of every kind is checked, not only the active one, so a
//! later `switch_filter` can never land on parameters nobody validated.

use crate::config::FilterConfig;
use crate::error::{ConfigError, ConfigResult};
use washout_filters::{AxisId, FilterKind};

/// Validator for [`FilterConfig`] values.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate a filter configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - an exponential `decay` is not in `(0, 1]`
    /// - a classical `tau` is not finite and `> 0`
    /// - the classical `gain` is not finite
    /// - the clip range is not finite or has `min > max`
    pub fn validate_config(&self, config: &FilterConfig) -> ConfigResult {
        self.validate_exponential(config)?;
        self.validate_classical(config)?;
        Ok(())
    }

    fn validate_exponential(&self, config: &FilterConfig) -> ConfigResult {
        for (axis, &decay) in config.exponential.decay.iter() {
            if !is_valid_decay(decay) {
                return Err(axis_error(
                    FilterKind::Exponential,
                    axis,
                    "decay",
                    decay,
                    "in (0, 1]",
                ));
            }
        }
        Ok(())
    }

    fn validate_classical(&self, config: &FilterConfig) -> ConfigResult {
        let params = &config.classical;

        for (axis, &tau) in params.tau.iter() {
            if !is_valid_tau(tau) {
                return Err(axis_error(FilterKind::Classical, axis, "tau", tau, "> 0"));
            }
        }

        if !params.gain.is_finite() {
            return Err(ConfigError::ParamOutOfRange {
                kind: FilterKind::Classical,
                field: "gain",
                value: params.gain,
                expected: "finite",
            });
        }

        if let Some(clip) = params.clip.filter(|clip| !clip.is_valid()) {
            return Err(ConfigError::InvalidClipRange {
                min: clip.min,
                max: clip.max,
            });
        }

        Ok(())
    }
}

/// `decay` lies in `(0, 1]`.
#[must_use]
pub fn is_valid_decay(decay: f64) -> bool {
    decay > 0.0 && decay <= 1.0
}

/// `tau` is finite and strictly positive.
#[must_use]
pub fn is_valid_tau(tau: f64) -> bool {
    tau.is_finite() && tau > 0.0
}

fn axis_error(
    kind: FilterKind,
    axis: AxisId,
    field: &'static str,
    value: f64,
    expected: &'static str,
) -> ConfigError {
    ConfigError::AxisParamOutOfRange {
        kind,
        axis,
        field,
        value,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washout_filters::ClipRange;

    #[test]
    fn test_default_config_is_valid() -> ConfigResult {
        ConfigValidator::new().validate_config(&FilterConfig::default())
    }

    #[test]
    fn test_decay_bounds() {
        assert!(is_valid_decay(1.0));
        assert!(is_valid_decay(0.025));
        assert!(!is_valid_decay(0.0));
        assert!(!is_valid_decay(1.01));
        assert!(!is_valid_decay(-0.1));
        assert!(!is_valid_decay(f64::NAN));
    }

    #[test]
    fn test_zero_decay_rejected_with_axis() {
        let config = FilterConfig::default().with_decay(AxisId::Pitch, 0.0);
        let result = ConfigValidator::new().validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::AxisParamOutOfRange {
                kind: FilterKind::Exponential,
                axis: AxisId::Pitch,
                field: "decay",
                ..
            })
        ));
    }

    #[test]
    fn test_nonpositive_tau_rejected() {
        for tau in [0.0, -1.2, f64::INFINITY, f64::NAN] {
            let config = FilterConfig::default().with_tau(AxisId::Yaw, tau);
            let result = ConfigValidator::new().validate_config(&config);
            assert!(
                matches!(
                    result,
                    Err(ConfigError::AxisParamOutOfRange {
                        axis: AxisId::Yaw,
                        field: "tau",
                        ..
                    })
                ),
                "tau {tau} accepted"
            );
        }
    }

    #[test]
    fn test_inverted_clip_rejected() {
        let config = FilterConfig::default().with_clip(ClipRange::new(1.0, -1.0));
        let result = ConfigValidator::new().validate_config(&config);
        assert!(matches!(result, Err(ConfigError::InvalidClipRange { .. })));
    }

    #[test]
    fn test_degenerate_clip_accepted() -> ConfigResult {
        let config = FilterConfig::default().with_clip(ClipRange::new(0.25, 0.25));
        ConfigValidator::new().validate_config(&config)
    }

    #[test]
    fn test_non_finite_gain_rejected() {
        let config = FilterConfig::default().with_gain(f64::NAN);
        let result = ConfigValidator::new().validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::ParamOutOfRange { field: "gain", .. })
        ));
    }

    #[test]
    fn test_inactive_kind_still_validated() {
        let config = FilterConfig::new(FilterKind::Disabled).with_tau(AxisId::X, -1.0);
        assert!(ConfigValidator::new().validate_config(&config).is_err());
    }
}
