//! Engine error types.
//!
//! [`ConfigError`] is fatal and only surfaces from `initialize`/`reconfigure`.
//! [`RuntimeFault`] is recovered locally inside `step` and only counted and
//! logged; it is `Copy` so reporting it never touches the heap.

use serde::Serialize;
use thiserror::Error;
use washout_filters::{AxisId, FilterKind, ParseError};

/// Result type for configuration operations.
pub type ConfigResult<T = ()> = Result<T, ConfigError>;

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A per-axis parameter is outside its allowed range.
    #[error("{kind} {field}_{axis} must be {expected}, got {value}")]
    AxisParamOutOfRange {
        /// Kind that owns the parameter
        kind: FilterKind,
        /// Offending axis
        axis: AxisId,
        /// Parameter name (`decay`, `tau`)
        field: &'static str,
        /// Rejected value
        value: f64,
        /// Human-readable constraint
        expected: &'static str,
    },

    /// A shared (all-axis) parameter is outside its allowed range.
    #[error("{kind} {field} must be {expected}, got {value}")]
    ParamOutOfRange {
        /// Kind that owns the parameter
        kind: FilterKind,
        /// Parameter name (`gain`)
        field: &'static str,
        /// Rejected value
        value: f64,
        /// Human-readable constraint
        expected: &'static str,
    },

    /// Clip bounds are not finite or `min > max`.
    #[error("clip range [{min}, {max}] is invalid: bounds must be finite with min <= max")]
    InvalidClipRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// The active kind name is not a known filter kind.
    #[error("unknown filter kind '{0}'")]
    UnknownFilterKind(String),

    /// An axis name is not one of the six platform axes.
    #[error("unknown axis '{0}'")]
    UnknownAxis(String),
}

impl ConfigError {
    /// Axis the error refers to, if it is axis-specific.
    #[must_use]
    pub fn axis(&self) -> Option<AxisId> {
        match self {
            ConfigError::AxisParamOutOfRange { axis, .. } => Some(*axis),
            _ => None,
        }
    }

    /// Parameter name the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::AxisParamOutOfRange { field, .. }
            | ConfigError::ParamOutOfRange { field, .. } => Some(field),
            ConfigError::InvalidClipRange { .. } => Some("clip"),
            ConfigError::UnknownFilterKind(_) => Some("type"),
            ConfigError::UnknownAxis(_) => None,
        }
    }
}

impl From<ParseError> for ConfigError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownAxis(name) => ConfigError::UnknownAxis(name),
            ParseError::UnknownFilterKind(name) => ConfigError::UnknownFilterKind(name),
        }
    }
}

/// Fault recovered inside a single `step` call.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "fault", rename_all = "snake_case")]
pub enum RuntimeFault {
    /// Raw input for an axis was NaN or infinite; previous output held.
    #[error("non-finite input {value} on axis {axis}")]
    NonFiniteInput {
        /// Faulted axis
        axis: AxisId,
        /// Offending raw value
        value: f64,
    },

    /// `dt` was not finite and positive; Classical axes held their output.
    #[error("invalid time step {dt}")]
    InvalidTimeStep {
        /// Offending elapsed time in seconds
        dt: f64,
    },

    /// Gained Classical output overflowed; previous output held.
    #[error("non-finite output on axis {axis}")]
    NonFiniteOutput {
        /// Faulted axis
        axis: AxisId,
    },
}

impl RuntimeFault {
    /// Numeric fault code for compact logging.
    ///
    /// ```
    /// use washout_engine::RuntimeFault;
    ///
    /// assert_eq!(RuntimeFault::InvalidTimeStep { dt: 0.0 }.code(), 2);
    /// ```
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            RuntimeFault::NonFiniteInput { .. } => 1,
            RuntimeFault::InvalidTimeStep { .. } => 2,
            RuntimeFault::NonFiniteOutput { .. } => 3,
        }
    }

    /// Axis the fault occurred on, when it is axis-specific.
    #[must_use]
    pub const fn axis(self) -> Option<AxisId> {
        match self {
            RuntimeFault::NonFiniteInput { axis, .. } | RuntimeFault::NonFiniteOutput { axis } => {
                Some(axis)
            }
            RuntimeFault::InvalidTimeStep { .. } => None,
        }
    }
}
