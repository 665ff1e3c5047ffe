//! Washout Filter Kinds
//!
//! The set of algorithms is closed, so the engine dispatches on this enum with
//! an exhaustive `match` instead of going through trait objects.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Selectable washout algorithm. Exactly one is active at a time.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Pure pass-through, no state
    #[default]
    Disabled = 0,
    /// Fast rise, per-tick fractional decay toward zero
    Exponential = 1,
    /// First-order high-pass with post gain and clip
    Classical = 2,
}

impl FilterKind {
    /// All kinds in declaration order.
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Disabled,
        FilterKind::Exponential,
        FilterKind::Classical,
    ];

    /// Canonical lowercase name, also used as the configuration section name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Disabled => "disabled",
            FilterKind::Exponential => "exponential",
            FilterKind::Classical => "classical",
        }
    }

    /// Whether the kind keeps per-axis memory between ticks.
    #[must_use]
    pub const fn is_stateful(self) -> bool {
        !matches!(self, FilterKind::Disabled)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ParseError;

    /// Accepts the canonical names plus the `no_washout` / `none` aliases,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "disabled" | "no_washout" | "none" => Ok(FilterKind::Disabled),
            "exponential" => Ok(FilterKind::Exponential),
            "classical" => Ok(FilterKind::Classical),
            _ => Err(ParseError::UnknownFilterKind(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_aliases() -> Result<(), ParseError> {
        assert_eq!("Classical".parse::<FilterKind>()?, FilterKind::Classical);
        assert_eq!("EXPONENTIAL".parse::<FilterKind>()?, FilterKind::Exponential);
        assert_eq!("no_washout".parse::<FilterKind>()?, FilterKind::Disabled);
        assert_eq!("none".parse::<FilterKind>()?, FilterKind::Disabled);
        Ok(())
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "butterworth".parse::<FilterKind>();
        assert_eq!(
            err,
            Err(ParseError::UnknownFilterKind("butterworth".to_string()))
        );
    }

    #[test]
    fn test_kind_display_round_trip() -> Result<(), ParseError> {
        for kind in FilterKind::ALL {
            assert_eq!(kind.to_string().parse::<FilterKind>()?, kind);
        }
        Ok(())
    }

    #[test]
    fn test_stateful() {
        assert!(!FilterKind::Disabled.is_stateful());
        assert!(FilterKind::Exponential.is_stateful());
        assert!(FilterKind::Classical.is_stateful());
    }
}
