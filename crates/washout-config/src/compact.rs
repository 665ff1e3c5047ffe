//! Compact filter strings
//!
//! One-line form used on command lines and in older profiles:
//!
//! ```text
//! classical:tau_x=1.2,tau_y=1.0,gain=1.0,clip=-1:1
//! exponential:decay=0.02
//! no_washout
//! ```

use washout_engine::ConfigValidator;
use washout_filters::{AxisId, FilterKind};

use crate::error::{ConfigWarning, LoadError, WarningKind};
use crate::loader::LoadReport;
use crate::metadata::ConfigMetadata;
use crate::syntax::{Draft, param_kind};

/// Parse a compact filter string.
///
/// A bare kind selects that kind with default parameters. With parameters,
/// only axes given a value (per axis or via a shared `decay`/`tau`) stay
/// enabled for the selected kind; the rest are disabled with a warning.
///
/// ```
/// use washout_config::parse_filter_string;
/// use washout_filters::{AxisId, FilterKind};
///
/// let report = parse_filter_string("classical:tau=1.2,gain=0.8").map_err(|e| e.to_string())?;
/// assert_eq!(report.config.active, FilterKind::Classical);
/// assert!(report.config.is_enabled(FilterKind::Classical, AxisId::Yaw));
/// # Ok::<(), String>(())
/// ```
///
/// # Errors
///
/// Returns `LoadError` if the kind is unknown or the result fails validation.
pub fn parse_filter_string(spec: &str) -> Result<LoadReport, LoadError> {
    let spec = spec.trim();
    let (kind_name, params) = match spec.split_once(':') {
        Some((kind, params)) => (kind.trim(), Some(params)),
        None => (spec, None),
    };

    if kind_name.is_empty() {
        return Err(LoadError::MissingActive);
    }
    let active: FilterKind = kind_name
        .parse()
        .map_err(|_parse_error: washout_filters::ParseError| LoadError::UnknownActiveKind {
            name: kind_name.to_string(),
        })?;

    let mut warnings = Vec::new();
    let mut draft = Draft::default();

    if let Some(params) = params {
        draft.require(active);
        for item in params.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let Some((key, value)) = item.split_once('=') else {
                warnings.push(ConfigWarning::new(
                    None,
                    WarningKind::MissingEquals,
                    format!("'{item}' is not key=value"),
                ));
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            draft.apply(owning_kind(&key, active), &key, value.trim(), None, &mut warnings);
        }
    }

    let config = draft.build(active, &mut warnings);
    ConfigValidator::new().validate_config(&config)?;

    Ok(LoadReport {
        config,
        warnings,
        metadata: ConfigMetadata::default(),
    })
}

/// Kind a compact key belongs to. Keys that name no kind of their own
/// (`enabled_<axis>`, unknown keys) go to the selected kind.
fn owning_kind(key: &str, selected: FilterKind) -> FilterKind {
    if key == "gain" || key == "clip" {
        return FilterKind::Classical;
    }
    let param = AxisId::split_key(key).map_or(key, |(param, _)| param);
    param_kind(param).unwrap_or(selected)
}
