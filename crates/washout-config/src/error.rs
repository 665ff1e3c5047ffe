//! Loader errors and per-line warnings.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use washout_engine::ConfigError;

/// Fatal load failure. Nothing usable was produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No `[Active]` section with a `type` key.
    #[error("no active filter type: expected 'type = <kind>' in an [Active] section")]
    MissingActive,

    /// The active kind name is not a known filter kind.
    #[error("unknown active filter type '{name}'")]
    UnknownActiveKind {
        /// Name as written
        name: String,
    },

    /// The assembled configuration failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Category of a non-fatal anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Line or item without `=`
    MissingEquals,
    /// Key/value line before any section header
    KeyOutsideSection,
    /// Section name that is neither `Active` nor a filter kind
    UnknownSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value that is not a number
    InvalidNumber,
    /// `enabled_<axis>` value that is not a boolean
    InvalidFlag,
    /// `clip` value that is not `min:max`
    InvalidClip,
    /// Axis with no value for its kind's required parameter
    MissingParameter,
}

impl WarningKind {
    /// Short snake_case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WarningKind::MissingEquals => "missing_equals",
            WarningKind::KeyOutsideSection => "key_outside_section",
            WarningKind::UnknownSection => "unknown_section",
            WarningKind::UnknownKey => "unknown_key",
            WarningKind::InvalidNumber => "invalid_number",
            WarningKind::InvalidFlag => "invalid_flag",
            WarningKind::InvalidClip => "invalid_clip",
            WarningKind::MissingParameter => "missing_parameter",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skipped or degraded entry. The load still succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    /// 1-based line number, when the source has lines
    pub line: Option<usize>,
    /// Category
    pub kind: WarningKind,
    /// Human-readable detail
    pub message: String,
}

impl ConfigWarning {
    pub(crate) fn new(line: Option<usize>, kind: WarningKind, message: impl Into<String>) -> Self {
        let warning = Self {
            line,
            kind,
            message: message.into(),
        };
        tracing::warn!(line = ?warning.line, kind = %warning.kind, "{}", warning.message);
        warning
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {} ({})", self.message, self.kind),
            None => write!(f, "{} ({})", self.message, self.kind),
        }
    }
}
