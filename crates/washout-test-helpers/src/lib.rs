//! Shared test utilities for the washout workspace.
//!
//! - [`mod@must`] - unwrap helpers with `#[track_caller]` diagnostics
//! - [`assertions`] - float and axis-vector assertion macros
//! - [`tracking`] - allocation tracking for the real-time tick path
//! - [`fixtures`] - canonical INI and motion CSV texts
//! - [`prelude`] - convenience re-exports
//!
//! ```rust,ignore
//! use washout_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "tracking")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracking")))]
pub mod tracking;

#[cfg(all(test, feature = "tracking"))]
#[global_allocator]
static GLOBAL_TEST: tracking::TrackingAllocator = tracking::TrackingAllocator;

#[cfg(feature = "fixtures")]
#[cfg_attr(docsrs, doc(cfg(feature = "fixtures")))]
pub mod fixtures;

pub use must::*;

#[cfg(feature = "tracking")]
pub use tracking::track;
