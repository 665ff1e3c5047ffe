//! Prelude for the washout filters crate.
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use washout_filters::prelude::*;
//!
//! let mut state = ExponentialState::new();
//! let out = exponential_filter(0.5, &mut state, 0.02);
//! assert_abs_diff_eq!(out, 0.5, epsilon = 1e-12);
//! ```

pub use crate::axis::{AXIS_COUNT, AxisArray, AxisId, AxisVector};
pub use crate::classical::{
    ClassicalState, classical_filter, high_pass_alpha, try_classical_filter,
};
pub use crate::clip::{ClipRange, gain_clip_filter};
pub use crate::disabled::bypass_filter;
pub use crate::exponential::{ExponentialState, exponential_filter};
pub use crate::kind::FilterKind;
pub use crate::state::{AxisState, AxisStates, FilterState};
