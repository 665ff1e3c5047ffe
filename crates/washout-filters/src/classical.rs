//! Classical Washout (first-order high-pass)
//!
//! Discrete high-pass `y[n] = alpha * (y[n-1] + x[n] - x[n-1])` with
//! `alpha = tau / (tau + dt)`. Sustained input decays toward zero with time
//! constant `tau`; transients pass through. `dt` is supplied every tick, so
//! `alpha` is recomputed per call and never cached.

/// State for the classical washout filter.
///
/// Holds the high-pass memory only. Gain and clipping are post-processing
/// applied by the caller and never fed back into this state.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - No heap allocations
/// - O(1) time complexity
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClassicalState {
    /// Previous raw input
    pub prev_input: f64,
    /// Previous high-pass output (before gain and clip)
    pub prev_output: f64,
}

impl ClassicalState {
    /// Create a zeroed state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prev_input: 0.0,
            prev_output: 0.0,
        }
    }
}

/// High-pass coefficient for a time constant and tick length.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use washout_filters::high_pass_alpha;
///
/// assert_abs_diff_eq!(high_pass_alpha(1.2, 0.05), 0.96, epsilon = 1e-12);
/// ```
#[inline]
#[must_use]
pub fn high_pass_alpha(tau: f64, dt: f64) -> f64 {
    tau / (tau + dt)
}

/// Whether `dt` can drive a classical step.
#[inline]
#[must_use]
pub fn is_valid_dt(dt: f64) -> bool {
    dt.is_finite() && dt > 0.0
}

/// One classical washout step without gain or clip.
///
/// Callers must pass `tau > 0` and `dt > 0`; see [`classical_filter`] for the
/// guarded variant.
#[inline]
#[must_use]
pub fn classical_step(raw: f64, prev_raw: f64, prev_out: f64, tau: f64, dt: f64) -> f64 {
    let alpha = high_pass_alpha(tau, dt);
    alpha * (prev_out + raw - prev_raw)
}

/// Classical washout filter, updating `state` in place.
///
/// An unusable `dt` (zero, negative or non-finite) or a step that would
/// overflow leaves the state untouched and returns the previous output. Use
/// [`try_classical_filter`] to tell those ticks apart.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - No syscalls or I/O
///
/// # Example
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use washout_filters::{ClassicalState, classical_filter};
///
/// let mut state = ClassicalState::new();
/// let out = classical_filter(1.0, &mut state, 1.2, 0.05);
/// assert_abs_diff_eq!(out, 0.96, epsilon = 1e-12);
/// ```
#[inline]
pub fn classical_filter(raw: f64, state: &mut ClassicalState, tau: f64, dt: f64) -> f64 {
    try_classical_filter(raw, state, tau, dt).unwrap_or(state.prev_output)
}

/// Classical washout filter that reports a rejected tick.
///
/// Returns `None`, leaving `state` untouched, when `dt` is unusable or the
/// step is not finite.
///
/// ```
/// use washout_filters::{ClassicalState, try_classical_filter};
///
/// let mut state = ClassicalState { prev_input: -f64::MAX, prev_output: f64::MAX };
/// assert_eq!(try_classical_filter(f64::MAX, &mut state, 1.0, 0.05), None);
/// assert_eq!(try_classical_filter(0.5, &mut ClassicalState::new(), 1.0, 0.0), None);
/// ```
#[inline]
#[must_use = "None means the tick was rejected"]
pub fn try_classical_filter(
    raw: f64,
    state: &mut ClassicalState,
    tau: f64,
    dt: f64,
) -> Option<f64> {
    if !is_valid_dt(dt) {
        return None;
    }

    let output = classical_step(raw, state.prev_input, state.prev_output, tau, dt);
    if !output.is_finite() {
        return None;
    }

    state.prev_input = raw;
    state.prev_output = output;
    Some(output)
}
