//! Key and value syntax shared by the file loader and the compact parser.

use washout_engine::{DEFAULT_GAIN, FilterConfig};
use washout_filters::{AxisArray, AxisId, ClipRange, FilterKind};

use crate::error::{ConfigWarning, WarningKind};

/// Kind whose required per-axis parameter is named `param`, accepting aliases.
#[must_use]
pub fn param_kind(param: &str) -> Option<FilterKind> {
    match param {
        "decay" | "decay_rate" => Some(FilterKind::Exponential),
        "tau" | "time_constant" => Some(FilterKind::Classical),
        _ => None,
    }
}

/// Canonical name of `kind`'s required per-axis parameter.
#[must_use]
pub const fn canonical_param(kind: FilterKind) -> Option<&'static str> {
    match kind {
        FilterKind::Disabled => None,
        FilterKind::Exponential => Some("decay"),
        FilterKind::Classical => Some("tau"),
    }
}

/// Parse an enabled flag: `1/0`, `true/false`, `yes/no`, `on/off`.
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a finite number.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a `min:max` clip range. Ordering is checked later by validation.
#[must_use]
pub fn parse_clip(value: &str) -> Option<ClipRange> {
    let (min, max) = value.split_once(':')?;
    Some(ClipRange::new(parse_number(min)?, parse_number(max)?))
}

/// Split `value | annotation`.
#[must_use]
pub fn split_annotation(value: &str) -> (&str, Option<&str>) {
    match value.split_once('|') {
        Some((value, note)) => (value.trim(), Some(note.trim()).filter(|n| !n.is_empty())),
        None => (value.trim(), None),
    }
}

/// Parameters collected for one kind before defaults are filled in.
#[derive(Debug, Clone, Default)]
struct KindDraft {
    required: bool,
    values: AxisArray<Option<f64>>,
    shared: Option<f64>,
    malformed: AxisArray<bool>,
    enabled: AxisArray<Option<bool>>,
}

/// Entries collected from a source, assembled into a [`FilterConfig`] once
/// the whole source has been read.
#[derive(Debug, Clone, Default)]
pub(crate) struct Draft {
    disabled: KindDraft,
    exponential: KindDraft,
    classical: KindDraft,
    gain: Option<f64>,
    clip: Option<ClipRange>,
}

impl Draft {
    fn kind_mut(&mut self, kind: FilterKind) -> &mut KindDraft {
        match kind {
            FilterKind::Disabled => &mut self.disabled,
            FilterKind::Exponential => &mut self.exponential,
            FilterKind::Classical => &mut self.classical,
        }
    }

    /// Require every axis of `kind` to end up with a parameter value; axes
    /// without one are disabled with a warning.
    pub(crate) fn require(&mut self, kind: FilterKind) {
        self.kind_mut(kind).required = true;
    }

    /// Apply one `key = value` entry to `kind`.
    ///
    /// Returns the canonical key when the entry was recognised, so callers
    /// can attach annotations to it.
    pub(crate) fn apply(
        &mut self,
        kind: FilterKind,
        key: &str,
        value: &str,
        line: Option<usize>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Option<String> {
        if kind == FilterKind::Classical && key == "gain" {
            match parse_number(value) {
                Some(gain) => self.gain = Some(gain),
                None => warnings.push(invalid_number(line, key, value)),
            }
            return Some(key.to_string());
        }

        if kind == FilterKind::Classical && key == "clip" {
            match parse_clip(value) {
                Some(clip) => self.clip = Some(clip),
                None => warnings.push(ConfigWarning::new(
                    line,
                    WarningKind::InvalidClip,
                    format!("clip '{value}' is not 'min:max'"),
                )),
            }
            return Some(key.to_string());
        }

        if param_kind(key) == Some(kind) {
            match parse_number(value) {
                Some(shared) => self.kind_mut(kind).shared = Some(shared),
                None => warnings.push(invalid_number(line, key, value)),
            }
            return canonical_param(kind).map(str::to_string);
        }

        let Some((param, axis)) = AxisId::split_key(key) else {
            warnings.push(unknown_key(line, kind, key));
            return None;
        };

        if param == "enabled" {
            match parse_flag(value) {
                Some(flag) => self.kind_mut(kind).enabled[axis] = Some(flag),
                None => warnings.push(ConfigWarning::new(
                    line,
                    WarningKind::InvalidFlag,
                    format!("{key} '{value}' is not a boolean"),
                )),
            }
            return Some(format!("enabled_{axis}"));
        }

        if param_kind(param) == Some(kind) {
            let draft = self.kind_mut(kind);
            match parse_number(value) {
                Some(v) => draft.values[axis] = Some(v),
                None => {
                    draft.malformed[axis] = true;
                    warnings.push(invalid_number(line, key, value));
                }
            }
            return canonical_param(kind).map(|p| format!("{p}_{axis}"));
        }

        warnings.push(unknown_key(line, kind, key));
        None
    }

    /// Fill defaults and build the configuration with `active` selected.
    pub(crate) fn build(self, active: FilterKind, warnings: &mut Vec<ConfigWarning>) -> FilterConfig {
        let mut config = FilterConfig::new(active);

        config.classical.gain = self.gain.unwrap_or(DEFAULT_GAIN);
        config.classical.clip = self.clip;

        let drafts = [
            (FilterKind::Disabled, self.disabled),
            (FilterKind::Exponential, self.exponential),
            (FilterKind::Classical, self.classical),
        ];

        for (kind, draft) in drafts {
            for axis in AxisId::ALL {
                let value = draft.values[axis].or(draft.shared);
                let mut enabled = draft.enabled[axis].unwrap_or(true);

                if let Some(param) = canonical_param(kind) {
                    if draft.malformed[axis] {
                        enabled = false;
                    } else if let Some(v) = value {
                        set_param(&mut config, kind, axis, v);
                    } else if draft.required {
                        warnings.push(ConfigWarning::new(
                            None,
                            WarningKind::MissingParameter,
                            format!("{kind} has no {param}_{axis}; axis disabled"),
                        ));
                        enabled = false;
                    }
                }

                config.set_enabled(kind, axis, enabled);
            }
        }

        config
    }
}

fn set_param(config: &mut FilterConfig, kind: FilterKind, axis: AxisId, value: f64) {
    match kind {
        FilterKind::Disabled => {}
        FilterKind::Exponential => config.exponential.decay[axis] = value,
        FilterKind::Classical => config.classical.tau[axis] = value,
    }
}

fn invalid_number(line: Option<usize>, key: &str, value: &str) -> ConfigWarning {
    ConfigWarning::new(
        line,
        WarningKind::InvalidNumber,
        format!("{key} '{value}' is not a finite number"),
    )
}

fn unknown_key(line: Option<usize>, kind: FilterKind, key: &str) -> ConfigWarning {
    ConfigWarning::new(
        line,
        WarningKind::UnknownKey,
        format!("unknown key '{key}' in {kind} section"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_aliases() {
        assert_eq!(param_kind("decay"), Some(FilterKind::Exponential));
        assert_eq!(param_kind("decay_rate"), Some(FilterKind::Exponential));
        assert_eq!(param_kind("tau"), Some(FilterKind::Classical));
        assert_eq!(param_kind("time_constant"), Some(FilterKind::Classical));
        assert_eq!(param_kind("gain"), None);
    }

    #[test]
    fn test_parse_flag() {
        for yes in ["1", "true", "Yes", " ON "] {
            assert_eq!(parse_flag(yes), Some(true), "{yes}");
        }
        for no in ["0", "FALSE", "no", "off"] {
            assert_eq!(parse_flag(no), Some(false), "{no}");
        }
        assert_eq!(parse_flag("2"), None);
    }

    #[test]
    fn test_parse_clip() {
        assert_eq!(parse_clip("-1.0:1.0"), Some(ClipRange::new(-1.0, 1.0)));
        assert_eq!(parse_clip(" -0.5 : 0.25 "), Some(ClipRange::new(-0.5, 0.25)));
        assert_eq!(parse_clip("1.0"), None);
        assert_eq!(parse_clip("a:b"), None);
        assert_eq!(parse_clip("-inf:1"), None);
    }

    #[test]
    fn test_split_annotation() {
        assert_eq!(split_annotation("1.2000 | seconds"), ("1.2000", Some("seconds")));
        assert_eq!(split_annotation("1.2000"), ("1.2000", None));
        assert_eq!(split_annotation("1.2 |  "), ("1.2", None));
        assert_eq!(split_annotation("1 | a | b"), ("1", Some("a | b")));
    }

    #[test]
    fn test_required_axis_without_value_is_disabled() {
        let mut draft = Draft::default();
        let mut warnings = Vec::new();
        draft.require(FilterKind::Classical);
        draft.apply(FilterKind::Classical, "tau_x", "1.5", Some(1), &mut warnings);

        let config = draft.build(FilterKind::Classical, &mut warnings);
        assert!(config.is_enabled(FilterKind::Classical, AxisId::X));
        assert!(!config.is_enabled(FilterKind::Classical, AxisId::Y));
        assert_eq!(
            warnings
                .iter()
                .filter(|w| w.kind == WarningKind::MissingParameter)
                .count(),
            5
        );
    }

    #[test]
    fn test_shared_default_covers_axes() {
        let mut draft = Draft::default();
        let mut warnings = Vec::new();
        draft.require(FilterKind::Exponential);
        draft.apply(FilterKind::Exponential, "decay", "0.03", None, &mut warnings);
        draft.apply(FilterKind::Exponential, "decay_rate_yaw", "0.01", None, &mut warnings);

        let config = draft.build(FilterKind::Exponential, &mut warnings);
        assert!(warnings.is_empty());
        assert!((config.exponential.decay[AxisId::X] - 0.03).abs() < f64::EPSILON);
        assert!((config.exponential.decay[AxisId::Yaw] - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_axis_is_disabled() {
        let mut draft = Draft::default();
        let mut warnings = Vec::new();
        draft.require(FilterKind::Classical);
        draft.apply(FilterKind::Classical, "tau", "1.2", None, &mut warnings);
        draft.apply(FilterKind::Classical, "tau_roll", "fast", Some(4), &mut warnings);

        let config = draft.build(FilterKind::Classical, &mut warnings);
        assert!(!config.is_enabled(FilterKind::Classical, AxisId::Roll));
        assert!(config.is_enabled(FilterKind::Classical, AxisId::Pitch));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_gain_only_for_classical() {
        let mut draft = Draft::default();
        let mut warnings = Vec::new();
        assert!(draft
            .apply(FilterKind::Exponential, "gain", "2.0", Some(3), &mut warnings)
            .is_none());
        assert_eq!(warnings.first().map(|w| w.kind), Some(WarningKind::UnknownKey));
    }
}
