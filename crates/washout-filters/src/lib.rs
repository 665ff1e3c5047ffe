//! RT-Safe Washout Filter Strategies
//!
//! A motion platform cannot hold a displacement forever, so sustained cues have
//! to be "washed out" back to neutral while short transients still reach the
//! operator. This crate provides the per-axis filter math for that job.
//!
//! # Overview
//!
//! - **Disabled**: pure bypass, no state
//! - **Exponential**: fast rise, fractional per-tick decay toward zero
//! - **Classical**: first-order high-pass, with shared gain and optional clip
//!   applied afterwards
//!
//! Per-axis data lives in [`AxisArray`] slots indexed by [`AxisId`], and each
//! axis keeps an [`AxisState`] holding memory for both stateful kinds.
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations in filter functions
//! - O(1) time complexity for all operations
//! - No syscalls or I/O
//! - All state types are `#[repr(C)]`
//!
//! # Example
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use washout_filters::prelude::*;
//!
//! let mut states = AxisStates::default();
//! let raw = AxisVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//!
//! // One 20 Hz tick of the classical filter on surge
//! let state = &mut states[AxisId::X].classical;
//! let out = classical_filter(raw[AxisId::X], state, 1.2, 0.05);
//! assert_abs_diff_eq!(out, 0.96, epsilon = 1e-12);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod axis;
pub mod classical;
pub mod clip;
pub mod disabled;
pub mod error;
pub mod exponential;
pub mod kind;
pub mod prelude;
pub mod state;

pub use axis::{AXIS_COUNT, AxisArray, AxisId, AxisVector};
pub use classical::{
    ClassicalState, classical_filter, classical_step, high_pass_alpha, is_valid_dt,
    try_classical_filter,
};
pub use clip::{ClipRange, gain_clip_filter};
pub use disabled::bypass_filter;
pub use error::ParseError;
pub use exponential::{ExponentialState, exponential_filter, exponential_step, is_rising};
pub use kind::FilterKind;
pub use state::{AxisState, AxisStates, FilterState};
