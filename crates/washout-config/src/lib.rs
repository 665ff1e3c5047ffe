//! Washout Profile Configuration
//!
//! Text front-end for [`washout_engine::FilterConfig`]:
//!
//! - **Loader**: sectioned `key = value` profiles with inline `|`
//!   annotations; tolerant, partial-success [`LoadReport`]
//! - **Writer**: renders a configuration back to the same format
//! - **Compact strings**: `classical:tau_x=1.2,gain=1.0,clip=-1:1`
//!
//! Expected per-line anomalies are [`ConfigWarning`]s, never errors. Only an
//! unreadable source, a missing or unknown active kind, or an out-of-range
//! parameter produce a [`LoadError`].
//!
//! # Example
//!
//! ```
//! use washout_config::load_config_str;
//! use washout_filters::{AxisId, FilterKind};
//!
//! let text = "[Active]\ntype = exponential\n\n[exponential]\ndecay = 0.02 | per tick\nenabled_yaw = 0\n";
//! let report = load_config_str(text).map_err(|e| e.to_string())?;
//!
//! assert!(report.is_clean());
//! assert_eq!(report.config.active, FilterKind::Exponential);
//! assert!(!report.config.is_active_enabled(AxisId::Yaw));
//! # Ok::<(), String>(())
//! ```

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compact;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod syntax;
pub mod writer;

pub use compact::parse_filter_string;
pub use error::{ConfigWarning, LoadError, WarningKind};
pub use loader::{LoadReport, load_config_file, load_config_str};
pub use metadata::{ConfigMetadata, SectionMetadata};
pub use writer::{RenderedProfile, format_value, render_config, save_config_file};
