//! Washout profile loader
//!
//! Reads the sectioned `key = value` format:
//!
//! ```text
//! [Active]
//! type = classical
//!
//! [classical]
//! name = Classical Washout
//! tau_x = 1.2000 | seconds, ~95% washed out after 3*tau
//! gain = 1.0000
//! clip = -1.0:1.0
//! enabled_yaw = 0
//! ```
//!
//! Per-line anomalies become [`ConfigWarning`]s and the load continues; only
//! the conditions in [`LoadError`] abort it.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use washout_engine::{ConfigValidator, FilterConfig};
use washout_filters::FilterKind;

use crate::error::{ConfigWarning, LoadError, WarningKind};
use crate::metadata::ConfigMetadata;
use crate::syntax::{Draft, split_annotation};

/// Result of a successful load: a usable configuration plus everything that
/// was skipped or degraded on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// Validated configuration
    pub config: FilterConfig,
    /// Non-fatal anomalies, in source order
    pub warnings: Vec<ConfigWarning>,
    /// Names, tooltips and annotations
    pub metadata: ConfigMetadata,
}

impl LoadReport {
    /// Whether the source loaded without a single warning.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings of one category.
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &ConfigWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Active,
    Kind(FilterKind),
    Unknown,
}

/// Load a profile from a file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise as
/// [`load_config_str`].
pub fn load_config_file(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let report = load_config_str(&text)?;
    info!(
        path = %path.display(),
        kind = %report.config.active,
        warnings = report.warnings.len(),
        "washout profile loaded"
    );
    Ok(report)
}

/// Load a profile from text.
///
/// # Errors
///
/// Returns `LoadError` if there is no `[Active]` type, the active kind is
/// unknown, or the assembled configuration fails validation.
pub fn load_config_str(text: &str) -> Result<LoadReport, LoadError> {
    let mut warnings = Vec::new();
    let mut metadata = ConfigMetadata::default();
    let mut draft = Draft::default();
    let mut active_name: Option<String> = None;
    let mut section = Section::None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = Some(index.saturating_add(1));
        let trimmed = raw_line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            section = parse_section(name.trim(), line, &mut warnings);
            if let Section::Kind(kind) = section {
                draft.require(kind);
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            warnings.push(ConfigWarning::new(
                line,
                WarningKind::MissingEquals,
                format!("'{trimmed}' is not a key = value line"),
            ));
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let (value, annotation) = split_annotation(value);

        match section {
            Section::None => warnings.push(ConfigWarning::new(
                line,
                WarningKind::KeyOutsideSection,
                format!("'{key}' appears before any section"),
            )),
            Section::Unknown => {
                debug!(line = ?line, key = %key, "skipping key in unknown section");
            }
            Section::Active => {
                if key == "type" {
                    active_name = Some(value.to_string());
                } else {
                    warnings.push(ConfigWarning::new(
                        line,
                        WarningKind::UnknownKey,
                        format!("unknown key '{key}' in Active section"),
                    ));
                }
            }
            Section::Kind(kind) => {
                let meta = metadata.section_mut(kind);
                match key.as_str() {
                    "name" => meta.name = Some(value.to_string()),
                    "tooltip" => meta.tooltip = Some(value.to_string()),
                    _ => {
                        let canonical = draft.apply(kind, &key, value, line, &mut warnings);
                        if let (Some(canonical), Some(note)) = (canonical, annotation) {
                            meta.annotations.insert(canonical, note.to_string());
                        }
                    }
                }
            }
        }
    }

    let active_name = active_name.ok_or(LoadError::MissingActive)?;
    let active: FilterKind = active_name
        .parse()
        .map_err(|_parse_error: washout_filters::ParseError| LoadError::UnknownActiveKind {
            name: active_name.clone(),
        })?;

    let config = draft.build(active, &mut warnings);
    ConfigValidator::new().validate_config(&config)?;

    Ok(LoadReport {
        config,
        warnings,
        metadata,
    })
}

fn parse_section(name: &str, line: Option<usize>, warnings: &mut Vec<ConfigWarning>) -> Section {
    if name.eq_ignore_ascii_case("active") {
        return Section::Active;
    }
    match name.parse::<FilterKind>() {
        Ok(kind) => Section::Kind(kind),
        Err(_unknown) => {
            warnings.push(ConfigWarning::new(
                line,
                WarningKind::UnknownSection,
                format!("unknown section [{name}]"),
            ));
            Section::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washout_filters::{AxisId, ClipRange};

    type TestResult = Result<(), LoadError>;

    #[test]
    fn test_minimal_active_only() -> TestResult {
        let report = load_config_str("[Active]\ntype = exponential\n")?;
        assert_eq!(report.config, FilterConfig::new(FilterKind::Exponential));
        assert!(report.is_clean());
        Ok(())
    }

    #[test]
    fn test_active_section_case_insensitive() -> TestResult {
        let report = load_config_str("[ACTIVE]\ntype = No_Washout\n")?;
        assert_eq!(report.config.active, FilterKind::Disabled);
        Ok(())
    }

    #[test]
    fn test_missing_active_is_fatal() {
        let result = load_config_str("[classical]\ntau = 1.2\n");
        assert!(matches!(result, Err(LoadError::MissingActive)));
    }

    #[test]
    fn test_unknown_active_is_fatal() {
        let result = load_config_str("[Active]\ntype = kalman\n");
        assert!(matches!(
            result,
            Err(LoadError::UnknownActiveKind { ref name }) if name == "kalman"
        ));
    }

    #[test]
    fn test_out_of_range_is_fatal() {
        let result = load_config_str("[Active]\ntype = classical\n[exponential]\ndecay = 1.5\n");
        assert!(matches!(result, Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_annotations_and_metadata() -> TestResult {
        let text = "\
[Active]
type = classical
[classical]
name = Classical Washout
tooltip = First-order high-pass
time_constant = 1.5 | shared default
tau_x = 1.2 | surge
clip = -0.5:0.5 | range
";
        let report = load_config_str(text)?;
        let meta = &report.metadata.classical;
        assert_eq!(meta.name.as_deref(), Some("Classical Washout"));
        assert_eq!(meta.tooltip.as_deref(), Some("First-order high-pass"));
        assert_eq!(meta.annotation("tau_x"), Some("surge"));
        assert_eq!(meta.annotation("tau"), Some("shared default"));
        assert_eq!(meta.annotation("clip"), Some("range"));
        assert!((report.config.classical.tau[AxisId::X] - 1.2).abs() < f64::EPSILON);
        assert!((report.config.classical.tau[AxisId::Yaw] - 1.5).abs() < f64::EPSILON);
        assert_eq!(report.config.classical.clip, Some(ClipRange::new(-0.5, 0.5)));
        Ok(())
    }

    #[test]
    fn test_line_anomalies_are_warnings() -> TestResult {
        let text = "\
orphan = 1
[Active]
type = classical
bogus = 2
[kalman]
q = 1
[classical]
tau = 1.2
just some words
gain = loud
enabled_x = maybe
clip = 1
wobble_x = 3
";
        let report = load_config_str(text)?;
        let kinds: Vec<(Option<usize>, WarningKind)> =
            report.warnings.iter().map(|w| (w.line, w.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (Some(1), WarningKind::KeyOutsideSection),
                (Some(4), WarningKind::UnknownKey),
                (Some(5), WarningKind::UnknownSection),
                (Some(9), WarningKind::MissingEquals),
                (Some(10), WarningKind::InvalidNumber),
                (Some(11), WarningKind::InvalidFlag),
                (Some(12), WarningKind::InvalidClip),
                (Some(13), WarningKind::UnknownKey),
            ]
        );
        assert!(report.config.is_enabled(FilterKind::Classical, AxisId::X));
        assert!(report.config.classical.clip.is_none());
        Ok(())
    }

    #[test]
    fn test_incomplete_section_disables_axes() -> TestResult {
        let text = "[Active]\ntype = exponential\n[exponential]\ndecay_x = 0.02\ndecay_y = oops\n";
        let report = load_config_str(text)?;
        let config = &report.config;
        assert!(config.is_enabled(FilterKind::Exponential, AxisId::X));
        assert!(!config.is_enabled(FilterKind::Exponential, AxisId::Y));
        assert!(!config.is_enabled(FilterKind::Exponential, AxisId::Z));
        // Other kinds keep their defaults
        assert!(config.is_enabled(FilterKind::Classical, AxisId::Y));
        assert_eq!(report.warnings_of(WarningKind::MissingParameter).count(), 4);
        assert_eq!(report.warnings_of(WarningKind::InvalidNumber).count(), 1);
        Ok(())
    }

    #[test]
    fn test_comments_are_skipped() -> TestResult {
        let text = "# header\n; note\n[Active]\n  # indented\ntype = disabled\n";
        assert!(load_config_str(text)?.is_clean());
        Ok(())
    }
}
