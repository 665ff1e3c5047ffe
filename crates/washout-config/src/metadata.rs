//! Display metadata carried alongside a loaded configuration.
//!
//! Names, tooltips and inline annotations do not affect filtering; they are
//! kept so the writer can reproduce them.

use std::collections::BTreeMap;

use serde::Serialize;
use washout_filters::FilterKind;

/// Metadata of one kind section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionMetadata {
    /// Display name (`name = ...`)
    pub name: Option<String>,
    /// One-line description (`tooltip = ...`)
    pub tooltip: Option<String>,
    /// Inline annotations by canonical key (`tau_x`, `gain`, ...)
    pub annotations: BTreeMap<String, String>,
}

impl SectionMetadata {
    /// Annotation for `key`, if one was written.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

/// Metadata for every kind section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigMetadata {
    /// `[disabled]` / `[no_washout]`
    pub disabled: SectionMetadata,
    /// `[exponential]`
    pub exponential: SectionMetadata,
    /// `[classical]`
    pub classical: SectionMetadata,
}

impl ConfigMetadata {
    /// Metadata of `kind`'s section.
    #[must_use]
    pub fn section(&self, kind: FilterKind) -> &SectionMetadata {
        match kind {
            FilterKind::Disabled => &self.disabled,
            FilterKind::Exponential => &self.exponential,
            FilterKind::Classical => &self.classical,
        }
    }

    /// Mutable metadata of `kind`'s section.
    pub fn section_mut(&mut self, kind: FilterKind) -> &mut SectionMetadata {
        match kind {
            FilterKind::Disabled => &mut self.disabled,
            FilterKind::Exponential => &mut self.exponential,
            FilterKind::Classical => &mut self.classical,
        }
    }
}
