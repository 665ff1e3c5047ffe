//! Washout profile writer
//!
//! Emits the loader's format: `[Active]` first, then one section per kind
//! with its metadata, parameters and enabled flags.

use std::fmt;
use std::path::Path;

use tracing::info;
use washout_engine::FilterConfig;
use washout_filters::{AxisId, FilterKind};

use crate::error::LoadError;
use crate::metadata::{ConfigMetadata, SectionMetadata};

/// Render `config` with its metadata.
///
/// Values are written with four decimals when that reproduces them exactly,
/// otherwise at full precision, so loading the output yields an equal
/// configuration.
///
/// ```
/// use washout_config::{ConfigMetadata, load_config_str, render_config};
/// use washout_engine::FilterConfig;
/// use washout_filters::FilterKind;
///
/// let config = FilterConfig::new(FilterKind::Classical);
/// let text = render_config(&config, &ConfigMetadata::default());
/// assert!(text.starts_with("[Active]\ntype = classical\n"));
/// assert_eq!(load_config_str(&text).map(|r| r.config).ok(), Some(config));
/// ```
#[must_use]
pub fn render_config(config: &FilterConfig, metadata: &ConfigMetadata) -> String {
    RenderedProfile { config, metadata }.to_string()
}

/// Render and write `config` to `path`.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be written.
pub fn save_config_file(
    path: impl AsRef<Path>,
    config: &FilterConfig,
    metadata: &ConfigMetadata,
) -> Result<(), LoadError> {
    let path = path.as_ref();
    std::fs::write(path, render_config(config, metadata)).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), kind = %config.active, "washout profile saved");
    Ok(())
}

/// Display adapter that writes a profile in file format.
#[derive(Debug, Clone, Copy)]
pub struct RenderedProfile<'a> {
    /// Configuration to write
    pub config: &'a FilterConfig,
    /// Names, tooltips and annotations to write alongside it
    pub metadata: &'a ConfigMetadata,
}

impl fmt::Display for RenderedProfile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_config(f, self.config, self.metadata)
    }
}

fn write_config(
    out: &mut fmt::Formatter<'_>,
    config: &FilterConfig,
    metadata: &ConfigMetadata,
) -> fmt::Result {
    writeln!(out, "[Active]")?;
    writeln!(out, "type = {}", config.active)?;

    for kind in FilterKind::ALL {
        let meta = metadata.section(kind);
        writeln!(out)?;
        writeln!(out, "[{kind}]")?;
        if let Some(name) = &meta.name {
            writeln!(out, "name = {name}")?;
        }
        if let Some(tooltip) = &meta.tooltip {
            writeln!(out, "tooltip = {tooltip}")?;
        }

        match kind {
            FilterKind::Disabled => {}
            FilterKind::Exponential => {
                for (axis, &decay) in config.exponential.decay.iter() {
                    write_entry(out, meta, &format!("decay_{axis}"), &format_value(decay))?;
                }
            }
            FilterKind::Classical => {
                let params = &config.classical;
                for (axis, &tau) in params.tau.iter() {
                    write_entry(out, meta, &format!("tau_{axis}"), &format_value(tau))?;
                }
                write_entry(out, meta, "gain", &format_value(params.gain))?;
                if let Some(clip) = params.clip {
                    let range = format!("{}:{}", format_value(clip.min), format_value(clip.max));
                    write_entry(out, meta, "clip", &range)?;
                }
            }
        }

        for axis in AxisId::ALL {
            let flag = if config.is_enabled(kind, axis) { "1" } else { "0" };
            write_entry(out, meta, &format!("enabled_{axis}"), flag)?;
        }
    }

    Ok(())
}

fn write_entry(
    out: &mut fmt::Formatter<'_>,
    meta: &SectionMetadata,
    key: &str,
    value: &str,
) -> fmt::Result {
    match meta.annotation(key) {
        Some(note) => writeln!(out, "{key} = {value} | {note}"),
        None => writeln!(out, "{key} = {value}"),
    }
}

/// Four decimals when exact, shortest round-trip representation otherwise.
#[must_use]
pub fn format_value(value: f64) -> String {
    let short = format!("{value:.4}");
    match short.parse::<f64>() {
        Ok(parsed) if parsed.to_bits() == value.to_bits() => short,
        _ => format!("{value}"),
    }
}
